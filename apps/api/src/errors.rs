use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Wire shape is the flat `{"error": message}` object the mobile client
/// expects — upstream details are logged server-side, never sent back.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("PRO required: {0}")]
    ProRequired(String),

    #[error("Daily free limit reached")]
    LimitReached,

    #[error("Upstream generation failed (status {status})")]
    Upstream { status: u16 },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "Missing required fields".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ProRequired(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::LimitReached => (
                StatusCode::TOO_MANY_REQUESTS,
                "Daily free limit reached".to_string(),
            ),
            AppError::Upstream { status } => {
                tracing::error!("Upstream completion call failed with status {status}");
                (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                    "Failed to generate content".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_maps_to_400() {
        let response = AppError::MissingFields.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_status_is_propagated() {
        let response = AppError::Upstream { status: 503 }.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_upstream_bad_status_falls_back_to_502() {
        let response = AppError::Upstream { status: 99 }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_limit_reached_maps_to_429() {
        let response = AppError::LimitReached.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
