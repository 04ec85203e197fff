//! Stats Cache Module
//!
//! Computes count and mean price over the record set and caches the result
//! for a fixed window so repeated reads do not recompute.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::store::Record;

// == Stats Snapshot ==
/// One computed aggregation over the full record set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Number of records
    pub total: usize,
    /// Mean of the price field, 0.0 for an empty set
    pub average_price: f64,
    /// Computation timestamp (Unix milliseconds)
    pub computed_at: u64,
}

// == Stats Cache ==
/// TTL cache around the stats aggregation.
///
/// A snapshot is served unchanged while `now - computed_at` is inside the
/// window; the first read after expiry recomputes and replaces it. State is
/// owned, with explicit `get_or_compute` and `invalidate`, so callers and
/// tests never touch ambient globals.
#[derive(Debug)]
pub struct StatsCache {
    /// Window length in milliseconds
    ttl_ms: u64,
    /// Cached snapshot, None when cold or invalidated
    entry: Option<StatsSnapshot>,
}

impl StatsCache {
    // == Constructor ==
    /// Creates a cold cache with the given TTL in seconds.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl_ms: ttl_secs * 1000,
            entry: None,
        }
    }

    // == Get Or Compute ==
    /// Returns the cached snapshot while it is inside the TTL window,
    /// recomputing from `records` otherwise.
    ///
    /// Boundary condition: a snapshot is stale once the full window has
    /// elapsed, i.e. when `now - computed_at >= ttl`.
    pub fn get_or_compute(&mut self, records: &[Record]) -> StatsSnapshot {
        let now = current_timestamp_ms();

        if let Some(entry) = self.entry {
            if now.saturating_sub(entry.computed_at) < self.ttl_ms {
                return entry;
            }
        }

        let snapshot = compute(records, now);
        self.entry = Some(snapshot);
        snapshot
    }

    // == Invalidate ==
    /// Drops the cached snapshot; the next read recomputes.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    // == Cached ==
    /// Returns the raw cached snapshot without any freshness check.
    pub fn cached(&self) -> Option<StatsSnapshot> {
        self.entry
    }
}

// == Compute ==
/// Aggregates the record set.
///
/// The mean of an empty set is defined as 0.0 so an empty catalog is a
/// valid answer, not a division error.
fn compute(records: &[Record], now: u64) -> StatsSnapshot {
    let total = records.len();
    let average_price = if total == 0 {
        0.0
    } else {
        records.iter().map(|r| r.price).sum::<f64>() / total as f64
    };

    StatsSnapshot {
        total,
        average_price,
        computed_at: now,
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use std::thread::sleep;
    use std::time::Duration;

    fn records_with_prices(prices: &[f64]) -> Vec<Record> {
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| Record {
                id: i as u64 + 1,
                name: format!("item_{}", i),
                price: *price,
                extra: Map::new(),
            })
            .collect()
    }

    #[test]
    fn test_mean_of_three_prices() {
        let mut cache = StatsCache::new(300);
        let records = records_with_prices(&[10.0, 20.0, 30.0]);

        let snapshot = cache.get_or_compute(&records);
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.average_price, 20.0);
    }

    #[test]
    fn test_mean_of_empty_set_is_zero() {
        let mut cache = StatsCache::new(300);

        let snapshot = cache.get_or_compute(&[]);
        assert_eq!(snapshot.total, 0);
        assert_eq!(snapshot.average_price, 0.0);
    }

    #[test]
    fn test_reads_inside_window_share_computed_at() {
        let mut cache = StatsCache::new(300);
        let records = records_with_prices(&[10.0, 20.0]);

        let first = cache.get_or_compute(&records);
        sleep(Duration::from_millis(5));
        let second = cache.get_or_compute(&records);

        assert_eq!(first.computed_at, second.computed_at);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cached_value_wins_inside_window() {
        let mut cache = StatsCache::new(300);
        let records = records_with_prices(&[10.0, 20.0]);

        let first = cache.get_or_compute(&records);

        // A different record set is ignored while the window holds
        let more = records_with_prices(&[10.0, 20.0, 30.0, 40.0]);
        let second = cache.get_or_compute(&more);

        assert_eq!(second.total, first.total);
        assert_eq!(second.average_price, first.average_price);
    }

    #[test]
    fn test_expiry_recomputes_with_new_timestamp() {
        let mut cache = StatsCache::new(1);
        let records = records_with_prices(&[10.0]);

        let first = cache.get_or_compute(&records);

        sleep(Duration::from_millis(1100));

        let more = records_with_prices(&[10.0, 30.0]);
        let second = cache.get_or_compute(&more);

        assert!(second.computed_at > first.computed_at);
        assert_eq!(second.total, 2);
        assert_eq!(second.average_price, 20.0);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut cache = StatsCache::new(300);
        let records = records_with_prices(&[10.0, 20.0]);

        cache.get_or_compute(&records);
        cache.invalidate();
        assert!(cache.cached().is_none());

        let more = records_with_prices(&[40.0]);
        let snapshot = cache.get_or_compute(&more);
        assert_eq!(snapshot.total, 1);
        assert_eq!(snapshot.average_price, 40.0);
    }
}
