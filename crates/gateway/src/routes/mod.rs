//! HTTP routes.

pub mod proxy;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(proxy::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
