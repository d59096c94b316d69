//! Portal shell: header, sidebar and the routed content area.
//!
//! Owns the sidebar collapse state and the route table; both live as long as
//! the shell is mounted.

use crate::layout::header::TopHeader;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::toast::{Notice, ToastService};
use crate::system::auth::{AuthService, LOGIN_PATH};
use crate::views::not_found::NotFound;
use crate::views::render_view;
use chrono::Utc;
use contracts::shell::routes::normalize_path;
use contracts::shell::{MenuTree, Resolution, RouteTable, UiLayoutState};
use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use std::time::Duration;

const CLOCK_TICK: Duration = Duration::from_secs(60);

#[component]
pub fn PortalShell() -> impl IntoView {
    let auth = expect_context::<AuthService>();
    let toasts = expect_context::<ToastService>();
    let location = use_location();
    let navigate = StoredValue::new_local(use_navigate());

    let layout = RwSignal::new(UiLayoutState::default());
    let collapsed = Signal::derive(move || layout.with(|l| l.sidebar_collapsed));

    let menu = MenuTree::builtin();
    let routes = RouteTable::for_portal(&menu);
    for err in routes.rejected() {
        log::warn!("route table: {}", err);
    }
    log::debug!(
        "route table: {} bindings ({} from menu)",
        routes.bindings().count(),
        routes.synthesized().len()
    );
    let routes = StoredValue::new(routes);

    // Re-render tick for the elapsed session time.
    let (now, set_now) = signal(Utc::now());
    match set_interval_with_handle(move || set_now.set(Utc::now()), CLOCK_TICK) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("clock tick unavailable: {:?}", e),
    }

    let active_path = Signal::derive(move || normalize_path(&location.pathname.get()));
    let session = Signal::derive(move || auth.current_user());

    let on_toggle = Callback::new(move |_: ()| layout.update(UiLayoutState::toggle));

    let on_logout = Callback::new(move |_: ()| {
        spawn_local(async move {
            if let Err(e) = auth.logout().await {
                log::warn!("logout failed: {}", e);
                toasts.notify(Notice::error("Logout", &e));
            }
            // Clearing the session unmounts the shell, whose redirect covers
            // the case where the navigate handle is already gone.
            navigate.try_with_value(|nav| nav(LOGIN_PATH, NavigateOptions::default()));
        });
    });

    let on_profile = Callback::new(move |_: ()| {
        let name = auth
            .current_user()
            .map(|s| s.display_name)
            .unwrap_or_default();
        toasts.notify(Notice::info("Profile", &format!("Signed in as {}", name)));
        navigate.with_value(|nav| nav("/profile", NavigateOptions::default()));
    });

    let on_settings = Callback::new(move |_: ()| {
        toasts.notify(Notice::info("Settings", "Settings are not available yet"));
    });

    view! {
        <Shell
            collapsed=collapsed
            header=move || view! {
                <TopHeader
                    collapsed=collapsed
                    on_toggle=on_toggle
                    session=session
                    now=now
                    on_profile=on_profile
                    on_settings=on_settings
                    on_logout=on_logout
                />
            }.into_any()
            left=move || view! {
                <Sidebar
                    menu=menu.clone()
                    active_path=active_path
                    collapsed=collapsed
                    on_toggle=on_toggle
                />
            }.into_any()
            center=move || view! {
                {move || {
                    let path = active_path.get();
                    let resolved = routes.with_value(|table| match table.resolve(&path) {
                        Resolution::Matched(binding) => Ok(binding.view_key.clone()),
                        Resolution::NotFound { path } => Err(path),
                    });
                    match resolved {
                        Ok(key) => render_view(&key),
                        Err(path) => {
                            log::debug!("no route for {}", path);
                            view! { <NotFound path=path /> }.into_any()
                        }
                    }
                }}
            }.into_any()
        />
    }
}
