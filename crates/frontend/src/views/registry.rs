//! View registry: the only place mapping a [`ViewKey`] to its view.

use super::dashboard::Dashboard;
use super::profile::ProfilePage;
use super::section::SectionPage;
use crate::domain::a001_bank::ui::list::BanksList;
use contracts::shell::ViewKey;
use leptos::prelude::*;

pub fn render_view(key: &ViewKey) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dedicated views
        // ═══════════════════════════════════════════════════════════════════
        ViewKey::Dashboard => view! { <Dashboard /> }.into_any(),

        // a001: Banks
        ViewKey::Banks => view! { <BanksList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // System
        // ═══════════════════════════════════════════════════════════════════
        ViewKey::Profile => view! { <ProfilePage /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Menu sections without a screen of their own
        // ═══════════════════════════════════════════════════════════════════
        ViewKey::Generic(label) => view! { <SectionPage title=label.clone() /> }.into_any(),
    }
}
