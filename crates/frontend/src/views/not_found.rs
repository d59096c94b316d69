use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn NotFound(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <div class="page page--centered">
            {icon("alert")}
            <h1 class="header__title">"Page not found"</h1>
            <p>"Nothing is registered at " <code>{path}</code> "."</p>
            <a class="button button--primary" href="/">"Back to dashboard"</a>
        </div>
    }
}
