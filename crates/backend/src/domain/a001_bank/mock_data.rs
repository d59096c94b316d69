use chrono::{TimeZone, Utc};
use contracts::domain::a001_bank::{Bank, BankId, BankStatus};
use uuid::Uuid;

const MOCK_BANKS: &[(&str, &str, &str, BankStatus, (i32, u32, u32))] = &[
    ("FNB001", "First National Bank", "United States", BankStatus::Active, (2019, 4, 2)),
    ("CMB014", "Coastal Merchant Bank", "United States", BankStatus::Active, (2020, 1, 15)),
    ("NRD203", "Nordic Savings Bank", "Sweden", BankStatus::Active, (2020, 9, 30)),
    ("ALP310", "Alpine Trust", "Switzerland", BankStatus::Suspended, (2021, 2, 11)),
    ("HBR042", "Harbor Commercial Bank", "Canada", BankStatus::Active, (2021, 7, 19)),
    ("SUN077", "Sunrise Credit Union", "Australia", BankStatus::Closed, (2018, 11, 5)),
    ("MRD118", "Meridian Bank", "United Kingdom", BankStatus::Active, (2022, 3, 8)),
    ("PAC505", "Pacific Rim Bank", "Singapore", BankStatus::Suspended, (2022, 10, 21)),
];

/// Fixed bank list used by the mock directory.
pub fn banks() -> Vec<Bank> {
    MOCK_BANKS
        .iter()
        .enumerate()
        .map(|(i, (code, name, country, status, (y, m, d)))| Bank {
            id: BankId::new(Uuid::from_u128(0xb4_0000 + i as u128)),
            code: code.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            status: *status,
            created_at: Utc
                .with_ymd_and_hms(*y, *m, *d, 9, 0, 0)
                .single()
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_and_codes_are_unique() {
        let banks = banks();
        let ids: HashSet<_> = banks.iter().map(|b| b.id).collect();
        let codes: HashSet<_> = banks.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(ids.len(), banks.len());
        assert_eq!(codes.len(), banks.len());
    }
}
