pub mod api_utils;
pub mod icons;
pub mod mount_guard;
pub mod toast;
