use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Tells async work whether the component that started it is still mounted.
///
/// Create it in the component body; check [`is_mounted`](Self::is_mounted)
/// after every `.await` before touching the component's state.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        let mounted = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&mounted);
        on_cleanup(move || flag.store(false, Ordering::Release));
        Self(mounted)
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
