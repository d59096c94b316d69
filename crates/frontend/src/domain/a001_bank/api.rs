use contracts::domain::a001_bank::{Bank, BankFilter};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Banks matching `filter`. Empty criteria are not sent.
pub async fn fetch_banks(access_token: &str, filter: &BankFilter) -> Result<Vec<Bank>, String> {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(search) = filter.search_term() {
        params.push(("search", search));
    }
    if let Some(status) = filter.status {
        params.push(("status", status.as_str().to_string()));
    }

    let response = Request::get(&api_url("/api/banks"))
        .query(params)
        .header("Authorization", &format!("Bearer {}", access_token))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<Bank>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
