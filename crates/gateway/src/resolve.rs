//! Request path resolution.
//!
//! Maps an incoming path to one of three route kinds and resolves the kind
//! into a target content address. Resolution never fails: unknown paths fall
//! back to the main page, and a missing link pointer propagates as an absent
//! address for the dispatcher to classify.

use anyhow::Result;

use crate::links::{DEPENDENCY_LINK, LinkStore, MAIN_LINK};

/// Path segment that marks a gated contract route.
const CONTRACT_MARKER: &str = "/contract/";

/// The three kinds of route the gateway serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// The main page, addressed by the "main" link pointer.
    Primary,

    /// The JS dependency bundle, addressed by the "dependency" link pointer.
    Dependency,

    /// A contract page, addressed directly on the content gateway and gated
    /// on tag validation of the matching transaction.
    Gated,
}

/// A classified and resolved request path.
///
/// Built once per request and discarded after the response is produced. A
/// gated route always carries its transaction id; the pointer-backed routes
/// carry `None` when the link store has no value for their pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedRoute {
    Primary { address: Option<String> },
    Dependency { address: Option<String> },
    Gated { address: String, tx_id: String },
}

impl ResolvedRoute {
    pub fn kind(&self) -> RouteKind {
        match self {
            ResolvedRoute::Primary { .. } => RouteKind::Primary,
            ResolvedRoute::Dependency { .. } => RouteKind::Dependency,
            ResolvedRoute::Gated { .. } => RouteKind::Gated,
        }
    }
}

/// Classify a request path without consulting the link store.
///
/// Returns the route kind and, for gated routes, the transaction id (the
/// remainder after the first `/contract/`). A `/contract/` with nothing after
/// it carries no id to gate on and falls back to the main page, like every
/// other unrecognized path.
pub fn classify(path: &str) -> (RouteKind, Option<String>) {
    if path == "/deps" {
        return (RouteKind::Dependency, None);
    }

    if let Some((_, after)) = path.split_once(CONTRACT_MARKER)
        && !after.is_empty()
    {
        return (RouteKind::Gated, Some(after.to_string()));
    }

    // "/" and the deliberate catch-all for everything else
    (RouteKind::Primary, None)
}

/// Resolve a request path into a route, consulting the link store for the
/// "main"/"dependency" pointers.
pub async fn resolve(
    path: &str,
    links: &dyn LinkStore,
    gateway_url: &str,
) -> Result<ResolvedRoute> {
    let route = match classify(path) {
        (RouteKind::Gated, Some(tx_id)) => ResolvedRoute::Gated {
            address: format!("{gateway_url}/{tx_id}"),
            tx_id,
        },
        (RouteKind::Dependency, _) => ResolvedRoute::Dependency {
            address: links.get(DEPENDENCY_LINK).await?,
        },
        _ => ResolvedRoute::Primary {
            address: links.get(MAIN_LINK).await?,
        },
    };

    Ok(route)
}
