//! Ricardian Fabric content gateway.
//!
//! Serves the Fabric main page and dependency bundle from addresses held in
//! a link store, and serves contract pages from the Arweave gateway only
//! after the contract transaction's tags pass validation. This library
//! exposes the internals for integration testing; the entry point for
//! running the server is the `fabric-gateway` binary.

pub mod arweave;
pub mod config;
pub mod error;
pub mod links;
pub mod resolve;
pub mod respond;
pub mod routes;
pub mod state;
pub mod validate;

pub use config::Config;
pub use routes::app;
pub use state::AppState;
