//! Axum route handler for the usage/entitlement status endpoint.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageResponse {
    pub date: NaiveDate,
    pub count: u32,
    pub total_bios: u64,
    pub remaining: u32,
    pub is_pro: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_generated_on: Option<NaiveDate>,
}

/// GET /api/usage
///
/// Reflects the gate state the client renders (remaining free uses, PRO
/// badge). Reading on a new day performs the daily reset.
pub async fn handle_usage(State(state): State<AppState>) -> Result<Json<UsageResponse>, AppError> {
    let record = state.gate.usage();
    let first_generated_on = state.gate.first_generated_on().map_err(AppError::Internal)?;

    Ok(Json(UsageResponse {
        date: record.date,
        count: record.count,
        total_bios: record.total_bios,
        remaining: state.gate.remaining(),
        is_pro: state.gate.is_pro(),
        first_generated_on,
    }))
}
