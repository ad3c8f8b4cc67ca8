//! Arweave upstream client.
//!
//! Two outbound operations, one network call each and no retries: a GraphQL
//! query for a transaction's tags, and a plain GET for content at a gateway
//! address.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::Config;

/// GraphQL query for a transaction's tags. The id is passed as a variable
/// rather than interpolated into the query text.
const TAGS_QUERY: &str = "query($id: ID!) { transaction(id: $id) { tags { name value } } }";

/// A name/value pair attached to an Arweave transaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Top-level GraphQL response envelope. `data` may be absent on a malformed
/// or error response; treat that the same as a missing transaction.
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<TransactionQuery>,
}

#[derive(Debug, Deserialize)]
struct TransactionQuery {
    transaction: Option<TransactionNode>,
}

#[derive(Debug, Deserialize)]
struct TransactionNode {
    #[serde(default)]
    tags: Vec<Tag>,
}

/// Client for the Arweave gateway and GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct ArweaveClient {
    http: reqwest::Client,
    graphql_url: String,
}

impl ArweaveClient {
    /// Build a client with the configured endpoints and request timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            graphql_url: config.graphql_url.clone(),
        })
    }

    /// Fetch the tags of a transaction.
    ///
    /// Returns `Ok(None)` when the transaction does not exist (or the
    /// response lacks the expected shape); `Err` on transport failure,
    /// non-2xx, or a non-JSON body.
    pub async fn transaction_tags(&self, tx_id: &str) -> Result<Option<Vec<Tag>>, reqwest::Error> {
        let body = serde_json::json!({
            "query": TAGS_QUERY,
            "variables": { "id": tx_id },
        });

        let response: GraphqlResponse = self
            .http
            .post(&self.graphql_url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .data
            .and_then(|d| d.transaction)
            .map(|tx| tx.tags))
    }

    /// Fetch content at a gateway address as text.
    ///
    /// The backend's own headers are discarded; the caller wraps the body in
    /// the request's response envelope.
    pub async fn fetch_text(&self, address: &str) -> Result<String, reqwest::Error> {
        self.http
            .get(address)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
