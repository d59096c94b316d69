use crate::system::auth::AuthService;
use chrono::Local;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthService>();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Profile"</h1>
                </div>
            </div>

            {move || match auth.current_user() {
                Some(user) => view! {
                    <dl class="details">
                        <dt>"Name"</dt>
                        <dd>{user.display_name}</dd>
                        <dt>"User id"</dt>
                        <dd><code>{user.user_id}</code></dd>
                        <dt>"Signed in"</dt>
                        <dd>
                            {user
                                .session_started_at
                                .with_timezone(&Local)
                                .format("%Y-%m-%d %H:%M")
                                .to_string()}
                        </dd>
                    </dl>
                }
                .into_any(),
                None => view! { <div class="placeholder">"Loading session..."</div> }.into_any(),
            }}
        </div>
    }
}
