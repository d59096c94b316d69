//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Application title
//! - Session info (user, login time, elapsed time)
//! - Profile, settings and logout actions

use crate::shared::icons::icon;
use chrono::{DateTime, Local, Utc};
use contracts::shell::{SessionHeader, UiLayoutState};
use contracts::system::auth::SessionInfo;
use leptos::prelude::*;

#[component]
pub fn TopHeader(
    #[prop(into)] collapsed: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(into)] session: Signal<Option<SessionInfo>>,
    /// Render tick; the session strings are derived again on every change.
    #[prop(into)]
    now: Signal<DateTime<Utc>>,
    on_profile: Callback<()>,
    on_settings: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let layout = move || UiLayoutState {
        sidebar_collapsed: collapsed.get(),
    };

    let header = move || {
        session.get().map(|s| {
            SessionHeader::derive(
                &s.session_started_at.with_timezone(&Local),
                &now.get().with_timezone(&Local),
            )
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| on_toggle.run(())
                    title=move || layout().toggle_title()
                    aria-expanded=move || (!collapsed.get()).to_string()
                >
                    {move || icon(layout().toggle_icon())}
                </button>
                <span class="top-header__title">"Payments Admin Portal"</span>
            </div>

            <div class="top-header__actions">
                {move || header().map(|h| view! {
                    <div class="top-header__session" title="Session">
                        {icon("clock")}
                        <span>{format!("Logged in at {}", h.login_time)}</span>
                        <span class="top-header__elapsed">{h.elapsed}</span>
                    </div>
                })}

                <button class="top-header__icon-btn" on:click=move |_| on_settings.run(()) title="Settings">
                    {icon("settings")}
                </button>

                <button class="top-header__user" on:click=move |_| on_profile.run(()) title="Profile">
                    {icon("user")}
                    <span>
                        {move || session.get()
                            .map(|s| s.display_name)
                            .unwrap_or_else(|| "...".to_string())}
                    </span>
                </button>

                <button class="top-header__icon-btn" on:click=move |_| on_logout.run(()) title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
