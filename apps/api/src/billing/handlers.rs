//! Axum route handlers for purchase and restore.
//!
//! Purchase failures are outcomes, not HTTP errors: the client renders
//! `{success: false, error}` inline on the paywall control, distinguishing
//! cancellation from hard failure by the message.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::billing::PurchaseError;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub product_id: String,
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RestoreResponse {
    pub restored: bool,
}

/// POST /api/billing/purchase
///
/// Runs the billing provider's purchase flow and, on success, activates the
/// persisted entitlement.
pub async fn handle_purchase(
    State(state): State<AppState>,
    Json(request): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, AppError> {
    if request.product_id.trim().is_empty() {
        return Err(AppError::Validation("productId cannot be empty".to_string()));
    }

    match state.billing.purchase(&request.product_id).await {
        Ok(receipt) => {
            state.gate.grant_pro().map_err(AppError::Internal)?;
            info!(
                "Purchase completed: {} (token {})",
                receipt.product_id, receipt.purchase_token
            );
            Ok(Json(PurchaseResponse {
                success: true,
                error: None,
            }))
        }
        Err(e @ PurchaseError::Cancelled) => Ok(Json(PurchaseResponse {
            success: false,
            error: Some(e.to_string()),
        })),
        Err(e) => {
            tracing::warn!("Purchase failed: {e}");
            Ok(Json(PurchaseResponse {
                success: false,
                error: Some(e.to_string()),
            }))
        }
    }
}

/// POST /api/billing/restore
///
/// Re-checks entitlements with the provider (reinstall path). A positive
/// answer re-activates the persisted flag; a negative one changes nothing.
pub async fn handle_restore(
    State(state): State<AppState>,
) -> Result<Json<RestoreResponse>, AppError> {
    let restored = state.billing.has_entitlement().await.unwrap_or(false);

    if restored {
        state.gate.grant_pro().map_err(AppError::Internal)?;
        info!("Entitlement restored");
    }

    Ok(Json(RestoreResponse { restored }))
}
