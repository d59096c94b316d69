pub mod dashboard;
pub mod not_found;
pub mod profile;
pub mod registry;
pub mod section;

pub use registry::render_view;
