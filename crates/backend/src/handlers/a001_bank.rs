use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a001_bank::{Bank, BankFilter};

use crate::shared::state::AppState;

/// GET /api/banks?search=..&status=..
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<BankFilter>,
) -> Json<Vec<Bank>> {
    Json(state.banks.list(&filter).await)
}
