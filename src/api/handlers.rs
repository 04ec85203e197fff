//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{CreateItemRequest, HealthResponse, ListParams, PageResponse, StatsResponse};
use crate::query;
use crate::stats::StatsCache;
use crate::store::{Record, RecordStore};

/// Application state shared across all handlers.
///
/// The record store and the stats cache are each wrapped in Arc<RwLock<>>
/// for thread-safe access. Handlers that touch both take the store lock
/// first.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe record store
    pub store: Arc<RwLock<RecordStore>>,
    /// Thread-safe stats cache
    pub stats: Arc<RwLock<StatsCache>>,
}

impl AppState {
    /// Creates a new AppState with the given store and stats TTL.
    pub fn new(store: RecordStore, stats_ttl: u64) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            stats: Arc::new(RwLock::new(StatsCache::new(stats_ttl))),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(RecordStore::new(&config.data_file), config.stats_ttl)
    }
}

/// Handler for GET /api/items
///
/// Lists records with optional substring search and offset/limit
/// pagination.
pub async fn list_items_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PageResponse>> {
    // Validate raw parameters before touching the store
    let opts = params.validate()?;

    // Acquire write lock (first call may populate the cache)
    let mut store = state.store.write().await;
    let records = store.records().await?;

    let page = query::find(records, &opts);
    Ok(Json(PageResponse::new(page)))
}

/// Handler for GET /api/items/:id
///
/// Retrieves a single record by id.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Record>> {
    let mut store = state.store.write().await;
    let records = store.records().await?;

    let record = query::find_by_id(records, id)?.clone();
    Ok(Json(record))
}

/// Handler for POST /api/items
///
/// Validates and inserts a new record, persisting it to the backing file.
/// Responds 201 with the stored record including its assigned id.
pub async fn create_item_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Record>)> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidParameter(error_msg));
    }

    // Acquire write lock and insert
    let record = {
        let mut store = state.store.write().await;
        store.insert(req.name, req.price, req.extra).await?
    };

    // A successful write makes the cached aggregation stale
    state.stats.write().await.invalidate();

    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for GET /api/stats
///
/// Returns record count and mean price, served from the TTL cache while
/// the window holds.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let mut store = state.store.write().await;
    let records = store.records().await?;

    let snapshot = state.stats.write().await.get_or_compute(records);
    Ok(Json(StatsResponse::new(snapshot)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
