use async_trait::async_trait;
use contracts::domain::a001_bank::{Bank, BankFilter};
use std::time::Duration;

use super::mock_data;

/// Source of bank records.
#[async_trait]
pub trait BankDirectory: Send + Sync {
    async fn list(&self, filter: &BankFilter) -> Vec<Bank>;
}

/// Directory over an in-memory array with a simulated round trip.
pub struct MockBankDirectory {
    banks: Vec<Bank>,
    latency: Duration,
}

impl MockBankDirectory {
    pub fn new(latency: Duration) -> Self {
        Self::with_banks(mock_data::banks(), latency)
    }

    pub fn with_banks(banks: Vec<Bank>, latency: Duration) -> Self {
        Self { banks, latency }
    }
}

#[async_trait]
impl BankDirectory for MockBankDirectory {
    async fn list(&self, filter: &BankFilter) -> Vec<Bank> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let found = filter.apply(&self.banks);
        tracing::debug!("bank lookup {:?}: {} of {}", filter, found.len(), self.banks.len());
        found
    }
}
