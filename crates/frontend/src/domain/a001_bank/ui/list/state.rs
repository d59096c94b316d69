use contracts::domain::a001_bank::{Bank, BankFilter};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct BankListState {
    pub items: Vec<Bank>,
    pub filter: BankFilter,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Sequence number of the latest request; older responses are dropped.
    pub request_seq: u64,
}

impl BankListState {
    /// Start a new request and return its sequence number.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.is_loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply a response. Returns `false` when a newer request superseded it.
    pub fn finish_request(&mut self, seq: u64, result: Result<Vec<Bank>, String>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e),
        }
        true
    }
}

pub fn create_state() -> RwSignal<BankListState> {
    RwSignal::new(BankListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_response_is_dropped() {
        let mut state = BankListState::default();
        let first = state.begin_request();
        let second = state.begin_request();

        assert!(!state.finish_request(first, Err("late".into())));
        assert!(state.error.is_none());
        assert!(state.is_loading);

        assert!(state.finish_request(second, Ok(Vec::new())));
        assert!(!state.is_loading);
    }

    #[test]
    fn error_keeps_previous_items() {
        let mut state = BankListState::default();
        let seq = state.begin_request();
        state.finish_request(seq, Err("HTTP 500".into()));
        assert_eq!(state.error.as_deref(), Some("HTTP 500"));
        assert!(state.items.is_empty());
    }
}
