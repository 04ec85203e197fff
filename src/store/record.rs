//! Record Module
//!
//! Defines the catalog record as stored in the backing JSON file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// == Record ==
/// A single catalog record.
///
/// The backing file is an array of these. Fields beyond `id`, `name` and
/// `price` are preserved verbatim through the flattened `extra` map so a
/// write never drops data the server does not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique record identifier
    pub id: u64,
    /// Display name, target of substring search
    pub name: String,
    /// Unit price, aggregated by the stats endpoint
    pub price: f64,
    /// Any additional fields carried by the source file
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
