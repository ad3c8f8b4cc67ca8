//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors a dispatched request can surface.
///
/// The path resolver and tag validator never fail; everything here comes from
/// the two remote services or the link store.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The link store has no value for a required pointer ("main"/"dependency").
    #[error("no {0:?} link configured")]
    MissingLink(&'static str),

    /// An outbound request to the gateway or GraphQL endpoint failed
    /// transport-level (network error, non-2xx, malformed body).
    #[error("upstream request failed")]
    Upstream(#[from] reqwest::Error),

    /// The link store itself was unreachable.
    #[error("link store unavailable")]
    Store(#[source] anyhow::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::MissingLink(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Store(_) => StatusCode::BAD_GATEWAY,
        };

        // Log the detail server-side; keep the body vague
        let body = match &self {
            GatewayError::MissingLink(name) => {
                tracing::error!(pointer = name, "link store is missing a required pointer");
                "gateway is not configured".to_string()
            }
            GatewayError::Upstream(e) => {
                tracing::error!(error = %e, "upstream request failed");
                "upstream request failed".to_string()
            }
            GatewayError::Store(e) => {
                tracing::error!(error = %e, "link store unavailable");
                "upstream request failed".to_string()
            }
        };

        (status, body).into_response()
    }
}

/// Result type alias using GatewayError.
pub type GatewayResult<T> = Result<T, GatewayError>;
