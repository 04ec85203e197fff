//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /api/items` - List records with search and pagination
//! - `GET /api/items/:id` - Retrieve a record by id
//! - `POST /api/items` - Insert a validated record
//! - `GET /api/stats` - Get cached record stats
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
