//! Configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::validate::ValidationMode;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 8787).
    pub port: u16,

    /// Redis connection URL for the link store.
    pub redis_url: String,

    /// Base URL of the content-addressed gateway (default: https://arweave.net).
    pub gateway_url: String,

    /// GraphQL endpoint for transaction metadata queries
    /// (default: https://arweave.net/graphql).
    pub graphql_url: String,

    /// Contract tag validation mode: "observed" or "strict" (default: "observed").
    pub validation_mode: ValidationMode,

    /// Timeout applied to each outbound request (default: 30s).
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8787".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        let gateway_url = env::var("GATEWAY_URL")
            .unwrap_or_else(|_| "https://arweave.net".to_string())
            .trim_end_matches('/')
            .to_string();
        url::Url::parse(&gateway_url).context("GATEWAY_URL must be a valid URL")?;

        let graphql_url =
            env::var("GRAPHQL_URL").unwrap_or_else(|_| format!("{gateway_url}/graphql"));
        url::Url::parse(&graphql_url).context("GRAPHQL_URL must be a valid URL")?;

        let validation_mode = match env::var("VALIDATION_MODE")
            .unwrap_or_else(|_| "observed".to_string())
            .to_lowercase()
            .as_str()
        {
            "observed" => ValidationMode::Observed,
            "strict" => ValidationMode::Strict,
            other => anyhow::bail!("VALIDATION_MODE must be \"observed\" or \"strict\", got {other:?}"),
        };

        let upstream_timeout_secs: u64 = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .context("UPSTREAM_TIMEOUT_SECS must be a valid u64")?;

        Ok(Self {
            port,
            redis_url,
            gateway_url,
            graphql_url,
            validation_mode,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
        })
    }
}
