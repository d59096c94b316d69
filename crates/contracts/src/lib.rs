pub mod domain;
pub mod shell;
pub mod system;
