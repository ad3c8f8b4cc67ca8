//! Link store abstraction.
//!
//! The gateway's "main" and "dependency" pointers live in an external
//! key-value store. All reads go through [`LinkStore`] so the backend can be
//! swapped (Redis in production, in-memory in tests) without touching any
//! call sites. The gateway never writes links; publishing new pointers is an
//! operational concern outside this service.

mod memory;
mod redis;

use std::fmt;

use anyhow::Result;
use async_trait::async_trait;

pub use memory::MemoryLinkStore;
pub use redis::RedisLinkStore;

/// Name of the pointer to the main page content.
pub const MAIN_LINK: &str = "main";

/// Name of the pointer to the dependency bundle.
pub const DEPENDENCY_LINK: &str = "dependency";

/// Read-only access to named content links.
#[async_trait]
pub trait LinkStore: Send + Sync + fmt::Debug {
    /// Look up a link by name.
    ///
    /// Returns `Ok(None)` when the name has no value; `Err` only when the
    /// store itself is unreachable.
    async fn get(&self, name: &str) -> Result<Option<String>>;
}
