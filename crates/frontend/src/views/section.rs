use leptos::prelude::*;

/// Placeholder page for menu sections without a dedicated screen.
#[component]
pub fn SectionPage(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{title}</h1>
                </div>
            </div>
            <div class="placeholder">
                "This section has no content yet."
            </div>
        </div>
    }
}
