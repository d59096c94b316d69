use crate::app_shell::PortalShell;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthService;
use crate::system::auth::LOGIN_PATH;
use crate::system::pages::login::LoginPage;
use contracts::shell::routes::normalize_path;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;
use thaw::{ConfigProvider, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthService::new();
    auth.restore();

    // App-wide collaborators, constructed once and handed down via context.
    provide_context(auth);
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <ToastHost />
                <Router>
                    <AppRoutes />
                </Router>
            </ToasterProvider>
        </ConfigProvider>
    }
}

/// Login page at `/login`, the portal shell everywhere else.
///
/// The shell stays mounted while navigating between its own routes.
#[component]
fn AppRoutes() -> impl IntoView {
    let location = use_location();
    let on_login_page = move || normalize_path(&location.pathname.get()) == LOGIN_PATH;

    view! {
        <Show when=on_login_page fallback=|| view! { <AuthGate /> }>
            <LoginPage />
        </Show>
    }
}

#[component]
fn AuthGate() -> impl IntoView {
    let auth = expect_context::<AuthService>();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <Redirect path=LOGIN_PATH /> }
        >
            <PortalShell />
        </Show>
    }
}
