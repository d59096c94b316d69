use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankId(pub Uuid);

impl BankId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankStatus {
    Active,
    Suspended,
    Closed,
}

impl BankStatus {
    pub const ALL: [BankStatus; 3] = [BankStatus::Active, BankStatus::Suspended, BankStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            BankStatus::Active => "active",
            BankStatus::Suspended => "suspended",
            BankStatus::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BankStatus::Active => "Active",
            BankStatus::Suspended => "Suspended",
            BankStatus::Closed => "Closed",
        }
    }
}

/// Issuing or acquiring bank managed from the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub id: BankId,
    pub code: String,
    pub name: String,
    pub country: String,
    pub status: BankStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Bank {
    /// Case-insensitive substring match on code, name and country,
    /// exact match on status. Empty criteria match everything.
    pub fn matches(&self, filter: &BankFilter) -> bool {
        if let Some(status) = filter.status {
            if self.status != status {
                return false;
            }
        }

        match filter.search_term() {
            None => true,
            Some(term) => [&self.code, &self.name, &self.country]
                .iter()
                .any(|field| field.to_lowercase().contains(&term)),
        }
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Query of the bank list; sent as URL query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BankStatus>,
}

impl BankFilter {
    /// Lowercased, trimmed search term; `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn apply<'a, I>(&self, banks: I) -> Vec<Bank>
    where
        I: IntoIterator<Item = &'a Bank>,
    {
        banks
            .into_iter()
            .filter(|bank| bank.matches(self))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bank(code: &str, name: &str, country: &str, status: BankStatus) -> Bank {
        Bank {
            id: BankId::new_v4(),
            code: code.into(),
            name: name.into(),
            country: country.into(),
            status,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_filter_matches_all() {
        let b = bank("NB01", "Northern Bank", "NO", BankStatus::Closed);
        assert!(b.matches(&BankFilter::default()));
        assert!(b.matches(&BankFilter {
            search: Some("   ".into()),
            status: None,
        }));
    }

    #[test]
    fn search_is_case_insensitive_over_fields() {
        let b = bank("NB01", "Northern Bank", "Norway", BankStatus::Active);
        for term in ["nb0", "NORTHERN", "way"] {
            assert!(b.matches(&BankFilter {
                search: Some(term.into()),
                status: None,
            }));
        }
        assert!(!b.matches(&BankFilter {
            search: Some("southern".into()),
            status: None,
        }));
    }

    #[test]
    fn status_and_search_combine() {
        let banks = vec![
            bank("A1", "Alpha", "US", BankStatus::Active),
            bank("A2", "Alpha Two", "US", BankStatus::Suspended),
            bank("B1", "Beta", "US", BankStatus::Active),
        ];
        let filter = BankFilter {
            search: Some("alpha".into()),
            status: Some(BankStatus::Active),
        };
        let found = filter.apply(&banks);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "A1");
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in BankStatus::ALL {
            assert_eq!(BankStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BankStatus::parse("open"), None);
    }
}
