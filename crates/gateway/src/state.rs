//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::arweave::ArweaveClient;
use crate::config::Config;
use crate::links::{LinkStore, RedisLinkStore};
use crate::validate::ValidationMode;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Everything inside is
/// read-only; no request mutates cross-request state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Read-only store of the "main"/"dependency" content pointers.
    links: Arc<dyn LinkStore>,

    /// Client for the content gateway and GraphQL endpoint.
    arweave: ArweaveClient,

    /// Base URL of the content gateway, used for contract addresses and the
    /// not-found page's deep link.
    gateway_url: String,

    /// Which tag conjunction gates contract access.
    validation_mode: ValidationMode,
}

impl AppState {
    /// Initialize state from configuration, with a Redis-backed link store.
    pub fn new(config: &Config) -> Result<Self> {
        let links = RedisLinkStore::open(&config.redis_url)
            .context("failed to open Redis link store")?;
        Self::with_link_store(config, Arc::new(links))
    }

    /// Initialize state with an explicit link store backend.
    pub fn with_link_store(config: &Config, links: Arc<dyn LinkStore>) -> Result<Self> {
        let arweave = ArweaveClient::new(config)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                links,
                arweave,
                gateway_url: config.gateway_url.clone(),
                validation_mode: config.validation_mode,
            }),
        })
    }

    /// The link store.
    pub fn links(&self) -> &dyn LinkStore {
        self.inner.links.as_ref()
    }

    /// The Arweave client.
    pub fn arweave(&self) -> &ArweaveClient {
        &self.inner.arweave
    }

    /// Base URL of the content gateway.
    pub fn gateway_url(&self) -> &str {
        &self.inner.gateway_url
    }

    /// The configured validation mode.
    pub fn validation_mode(&self) -> ValidationMode {
        self.inner.validation_mode
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("gateway_url", &self.inner.gateway_url)
            .field("validation_mode", &self.inner.validation_mode)
            .finish()
    }
}
