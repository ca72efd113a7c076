//! Axum route handlers for the Generation API.
//!
//! Order of operations is fixed: field validation, entitlement
//! re-validation, gate check, generation, then usage accounting — so a
//! blocked or invalid request never touches the upstream service and a
//! failed generation never consumes a free use.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::billing::ensure_fresh_entitlement;
use crate::errors::AppError;
use crate::generation::models::{BioRequest, BioSections, GenerateBody};
use crate::generation::segment::parse_sections;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub content: String,
    pub output_type: String,
}

/// POST /api/generate
///
/// The raw wire contract: `{content, outputType}`. Section splitting is the
/// consumer's choice (or `/api/generate/sections` below).
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<GenerateResponse>, AppError> {
    let (request, content) = run_generation(&state, &body).await?;

    Ok(Json(GenerateResponse {
        content,
        output_type: request.output.as_str().to_string(),
    }))
}

/// POST /api/generate/sections
///
/// Same pipeline, but the response is segmented into named sections the way
/// the result cards render them.
pub async fn handle_generate_sections(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<BioSections>, AppError> {
    let (request, content) = run_generation(&state, &body).await?;

    Ok(Json(parse_sections(&content, request.output)))
}

/// Shared pipeline for both generate endpoints.
async fn run_generation(
    state: &AppState,
    body: &GenerateBody,
) -> Result<(BioRequest, String), AppError> {
    // Validation first: a missing field means no re-validation, no gate
    // mutation, no upstream call.
    let request = BioRequest::from_body(body)?;

    ensure_fresh_entitlement(&state.gate, state.billing.as_ref()).await;
    state.gate.check_request(&request)?;

    let content = state.generator.generate(&request).await?;

    let is_pro = state.gate.is_pro();
    if !is_pro {
        state.gate.record_generation().map_err(AppError::Internal)?;
    }
    state.gate.mark_first_generation().map_err(AppError::Internal)?;

    info!(
        "Generated {} via {} backend (pro={})",
        request.output.as_str(),
        state.generator.backend(),
        is_pro
    );

    Ok((request, content))
}
