//! Item Catalog - A lightweight JSON-file-backed catalog API
//!
//! Serves a flat file of records over REST with search, pagination and
//! TTL-cached stats.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod stats;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_reload_task;
