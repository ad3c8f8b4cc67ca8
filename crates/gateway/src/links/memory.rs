//! In-memory link store for tests and local development.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use super::LinkStore;

/// Fixed in-memory link map.
#[derive(Debug, Clone, Default)]
pub struct MemoryLinkStore {
    links: HashMap<String, String>,
}

impl MemoryLinkStore {
    /// Create an empty store (every lookup returns `None`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a link, returning `self` for chaining.
    pub fn with_link(mut self, name: &str, value: &str) -> Self {
        self.links.insert(name.to_string(), value.to_string());
        self
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.links.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_links() {
        let store = MemoryLinkStore::new().with_link("main", "https://example.com/index.html");
        assert_eq!(
            store.get("main").await.unwrap(),
            Some("https://example.com/index.html".to_string())
        );
        assert_eq!(store.get("dependency").await.unwrap(), None);
    }
}
