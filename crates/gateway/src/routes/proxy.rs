//! Request dispatch.
//!
//! A single catch-all handler implements the whole path surface: the path
//! resolver decides the route kind, gated routes run the tag-validation gate,
//! and everything else proxies directly. No method-specific semantics beyond
//! the OPTIONS short-circuit; GET, HEAD and POST all dispatch the same way.

use axum::Router;
use axum::extract::{Request, State};
use axum::http::Method;
use axum::response::Response;
use tracing::{debug, info};

use crate::error::{GatewayError, GatewayResult};
use crate::links::{DEPENDENCY_LINK, MAIN_LINK};
use crate::resolve::{self, ResolvedRoute};
use crate::respond::{self, ResponseEnvelope};
use crate::state::AppState;
use crate::validate;

/// Create the proxy router: every path lands in [`dispatch`].
pub fn router() -> Router<AppState> {
    Router::new().fallback(dispatch)
}

/// Resolve, gate, and proxy one request.
async fn dispatch(State(state): State<AppState>, request: Request) -> GatewayResult<Response> {
    // OPTIONS never resolves or fetches anything
    if request.method() == Method::OPTIONS {
        return Ok(respond::preflight());
    }

    let path = request.uri().path();
    let route = resolve::resolve(path, state.links(), state.gateway_url())
        .await
        .map_err(GatewayError::Store)?;
    debug!(path, kind = ?route.kind(), "resolved route");

    let envelope = ResponseEnvelope::for_kind(route.kind());

    match route {
        // A missing pointer means the store was never seeded; fetching an
        // empty address would not be meaningful.
        ResolvedRoute::Primary { address } => {
            let address = address.ok_or(GatewayError::MissingLink(MAIN_LINK))?;
            proxy(&state, &address, &envelope).await
        }
        ResolvedRoute::Dependency { address } => {
            let address = address.ok_or(GatewayError::MissingLink(DEPENDENCY_LINK))?;
            proxy(&state, &address, &envelope).await
        }
        ResolvedRoute::Gated { address, tx_id } => {
            let record = state.arweave().transaction_tags(&tx_id).await?;

            if validate::is_acceptable(record.as_deref(), state.validation_mode()) {
                proxy(&state, &address, &envelope).await
            } else {
                info!(%tx_id, found = record.is_some(), "contract rejected");
                Ok(envelope.not_found(&tx_id, state.gateway_url()))
            }
        }
    }
}

/// Fetch content at an address and wrap it in the envelope.
async fn proxy(
    state: &AppState,
    address: &str,
    envelope: &ResponseEnvelope,
) -> GatewayResult<Response> {
    let body = state.arweave().fetch_text(address).await?;
    Ok(envelope.ok(body))
}
