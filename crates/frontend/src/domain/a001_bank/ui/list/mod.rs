pub mod state;

use self::state::create_state;
use crate::domain::a001_bank::api::fetch_banks;
use crate::shared::icons::icon;
use crate::shared::mount_guard::MountGuard;
use crate::system::auth::AuthService;
use contracts::domain::a001_bank::{Bank, BankStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

fn status_class(status: BankStatus) -> &'static str {
    match status {
        BankStatus::Active => "badge badge--success",
        BankStatus::Suspended => "badge badge--warning",
        BankStatus::Closed => "badge badge--neutral",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BanksList() -> impl IntoView {
    let auth = expect_context::<AuthService>();
    let state = create_state();
    let guard = StoredValue::new(MountGuard::new());

    let fetch = move || {
        let Some(token) = auth.access_token_untracked() else {
            return;
        };
        let filter = state.with_untracked(|s| s.filter.clone());
        let seq = state.try_update(|s| s.begin_request()).unwrap_or_default();
        let guard = guard.get_value();

        spawn_local(async move {
            let result = fetch_banks(&token, &filter).await;
            if !guard.is_mounted() {
                return;
            }
            if let Err(e) = &result {
                log::warn!("Failed to load banks: {}", e);
            }
            state.try_update(|s| s.finish_request(seq, result));
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Banks"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                <div class="filter-bar__search">
                    {icon("search")}
                    <input
                        type="search"
                        placeholder="Search by code, name or country"
                        prop:value=move || state.with(|s| s.filter.search.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filter.search = Some(value));
                            fetch();
                        }
                    />
                </div>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.filter.status = BankStatus::parse(&value));
                    fetch();
                }>
                    <option value="">"All statuses"</option>
                    {BankStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Country"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(bank_row).collect_view()}
                    </tbody>
                </table>
                <Show when=move || state.with(|s| !s.is_loading && s.items.is_empty() && s.error.is_none())>
                    <div class="table__empty">"No banks match the current filter"</div>
                </Show>
                <Show when=move || state.with(|s| s.is_loading)>
                    <div class="table__loading">"Loading..."</div>
                </Show>
            </div>
        </div>
    }
}

fn bank_row(bank: Bank) -> impl IntoView {
    view! {
        <tr class="table__row">
            <td class="table__cell">{bank.code}</td>
            <td class="table__cell">{bank.name}</td>
            <td class="table__cell">{bank.country}</td>
            <td class="table__cell">
                <span class=status_class(bank.status)>{bank.status.label()}</span>
            </td>
            <td class="table__cell">{format_timestamp(bank.created_at)}</td>
        </tr>
    }
}
