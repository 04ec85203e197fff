//! Client Module
//!
//! HTTP consumer of the catalog API. Fetches pages and stats with
//! cooperative cancellation, and computes the visible window for a
//! fixed-row-height list.

mod fetch;
mod window;

pub use fetch::{ClientError, ItemsClient};
pub use window::visible_range;
