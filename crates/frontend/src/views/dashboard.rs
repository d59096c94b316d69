use crate::shared::icons::icon;
use crate::system::auth::AuthService;
use contracts::shell::routes::normalize_path;
use contracts::shell::MenuTree;
use leptos::prelude::*;

/// Landing page: greeting plus a shortcut to every routable menu item.
#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = expect_context::<AuthService>();

    let mut shortcuts: Vec<(String, String, String)> = Vec::new();
    MenuTree::builtin().walk(|node| {
        if let Some(path) = node.path().filter(|p| normalize_path(p) != "/") {
            shortcuts.push((node.label().to_string(), node.icon().to_string(), path.to_string()));
        }
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                </div>
            </div>

            <p class="page__lead">
                {move || match auth.current_user() {
                    Some(user) => format!("Welcome back, {}.", user.display_name),
                    None => "Welcome.".to_string(),
                }}
            </p>

            <div class="card-grid">
                {shortcuts
                    .into_iter()
                    .map(|(label, icon_name, path)| view! {
                        <a class="card card--link" href=path>
                            {icon(&icon_name)}
                            <span class="card__title">{label}</span>
                        </a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
