//! Fire-and-forget notifications.
//!
//! Components queue a [`Notice`] on the [`ToastService`]; [`ToastHost`], placed
//! once inside thaw's `ToasterProvider`, hands them to the toaster.

use leptos::prelude::*;
use thaw::{Toast, ToastBody, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NoticeIntent {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub intent: NoticeIntent,
}

impl Notice {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            intent: NoticeIntent::Info,
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self {
            intent: NoticeIntent::Error,
            ..Self::info(title, description)
        }
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    pending: RwSignal<Vec<Notice>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(Vec::new()),
        }
    }

    pub fn notify(&self, notice: Notice) {
        log::debug!("toast: {} - {}", notice.title, notice.description);
        self.pending.update(|queue| queue.push(notice));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = expect_context::<ToastService>();
    let toaster = ToasterInjection::expect_context();

    Effect::new(move |_| {
        if service.pending.with(Vec::is_empty) {
            return;
        }
        let notices = service.pending.try_update(std::mem::take).unwrap_or_default();

        for notice in notices {
            let intent = match notice.intent {
                NoticeIntent::Info => ToastIntent::Info,
                NoticeIntent::Success => ToastIntent::Success,
                NoticeIntent::Error => ToastIntent::Error,
            };
            let Notice {
                title, description, ..
            } = notice;
            toaster.dispatch_toast(
                move || {
                    view! {
                        <Toast>
                            <ToastTitle>{title}</ToastTitle>
                            <ToastBody>{description}</ToastBody>
                        </Toast>
                    }
                },
                ToastOptions::default().with_intent(intent),
            );
        }
    });
}
