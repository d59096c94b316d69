pub mod aggregate;

pub use aggregate::{Bank, BankFilter, BankId, BankStatus};
