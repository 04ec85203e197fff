//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies. The same types
//! are deserialized by the bundled client.

use serde::{Deserialize, Serialize};

use crate::query::Page;
use crate::stats::StatsSnapshot;
use crate::store::Record;

/// Response body for the list operation (GET /api/items)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse {
    /// Records in original file order
    pub items: Vec<Record>,
    /// Size of the full filtered set
    pub total: usize,
    /// Offset the page was requested at
    pub offset: usize,
    /// Limit the page was requested with, null for unbounded
    pub limit: Option<usize>,
}

impl PageResponse {
    /// Creates a new PageResponse from an engine page
    pub fn new(page: Page) -> Self {
        Self {
            items: page.items,
            total: page.total,
            offset: page.offset,
            limit: page.limit,
        }
    }

    /// Converts back into an engine page (client side)
    pub fn into_page(self) -> Page {
        Page {
            items: self.items,
            total: self.total,
            offset: self.offset,
            limit: self.limit,
        }
    }
}

/// Response body for the stats endpoint (GET /api/stats)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Number of records
    pub total: usize,
    /// Mean of the price field
    pub average_price: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache snapshot
    pub fn new(snapshot: StatsSnapshot) -> Self {
        Self {
            total: snapshot.total,
            average_price: snapshot.average_price,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
