use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::system::auth::AuthService;

#[derive(Clone, Debug, PartialEq, Eq)]
enum LoginStatus {
    Idle,
    Submitting,
    Failed(String),
}

impl LoginStatus {
    fn is_submitting(&self) -> bool {
        matches!(self, LoginStatus::Submitting)
    }

    fn error(&self) -> Option<String> {
        match self {
            LoginStatus::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }
}

/// Sign-in form. On success the portal opens at the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthService>();
    let navigate = StoredValue::new_local(use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(LoginStatus::Idle);
    let busy = move || status.with(LoginStatus::is_submitting);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        status.set(LoginStatus::Submitting);

        let credentials = (username.get_untracked(), password.get_untracked());
        spawn_local(async move {
            match auth.login(credentials.0, credentials.1).await {
                Ok(()) => {
                    status.try_set(LoginStatus::Idle);
                    navigate.try_with_value(|nav| nav("/", NavigateOptions::default()));
                }
                Err(message) => {
                    log::info!("sign-in rejected: {}", message);
                    status.try_set(LoginStatus::Failed(message));
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Payments Admin Portal"</h1>
                <h2>"Sign in to continue"</h2>

                {move || status.with(LoginStatus::error).map(|message| view! {
                    <div class="error-message">{message}</div>
                })}

                <form on:submit=submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=busy
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=busy
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
