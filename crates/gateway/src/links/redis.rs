//! Redis-backed link store.

use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::Client as RedisClient;

use super::LinkStore;

/// Key prefix for link entries, so the gateway coexists with other users of
/// the same Redis instance.
const KEY_PREFIX: &str = "links:";

/// Link store reading from Redis.
#[derive(Clone)]
pub struct RedisLinkStore {
    client: RedisClient,
}

impl RedisLinkStore {
    /// Open a Redis client for the given URL.
    ///
    /// Connections are established lazily per lookup; an unreachable server
    /// surfaces as an error from [`LinkStore::get`], not here.
    pub fn open(redis_url: &str) -> Result<Self> {
        let client = RedisClient::open(redis_url).context("invalid Redis URL")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LinkStore for RedisLinkStore {
    async fn get(&self, name: &str) -> Result<Option<String>> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .context("failed to connect to Redis")?;

        let value: Option<String> = conn
            .get(format!("{KEY_PREFIX}{name}"))
            .await
            .with_context(|| format!("failed to read link {name:?}"))?;

        Ok(value)
    }
}

impl std::fmt::Debug for RedisLinkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisLinkStore").finish()
    }
}
