pub mod top_header;

pub use top_header::TopHeader;
