//! Stats Module
//!
//! Aggregates record counts and mean price behind a TTL cache.

mod cache;

// Re-export public types
pub use cache::{current_timestamp_ms, StatsCache, StatsSnapshot};

// == Public Constants ==
/// Default stats cache TTL in seconds
pub const DEFAULT_STATS_TTL: u64 = 300;
