//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};
use crate::query::FindOptions;
use crate::store::MAX_NAME_LENGTH;

/// Query string for the list operation (GET /api/items)
///
/// # Fields
/// - `q`: Optional case-insensitive substring to match against names
/// - `offset`: Number of matched records to skip (default 0)
/// - `limit`: Maximum page size (default unbounded)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Optional search needle
    pub q: Option<String>,
    /// Raw offset, validated before use
    pub offset: Option<i64>,
    /// Raw limit, validated before use
    pub limit: Option<i64>,
}

impl ListParams {
    /// Validates the raw parameters into `FindOptions`.
    ///
    /// Missing values fall back to offset 0 and an unbounded limit;
    /// negative values fail with `InvalidParameter`.
    pub fn validate(&self) -> Result<FindOptions> {
        let offset = match self.offset {
            Some(v) if v < 0 => {
                return Err(ApiError::InvalidParameter(format!(
                    "offset must be non-negative, got {}",
                    v
                )))
            }
            Some(v) => v as usize,
            None => 0,
        };

        let limit = match self.limit {
            Some(v) if v < 0 => {
                return Err(ApiError::InvalidParameter(format!(
                    "limit must be non-negative, got {}",
                    v
                )))
            }
            Some(v) => Some(v as usize),
            None => None,
        };

        Ok(FindOptions {
            query: self.q.clone(),
            offset,
            limit,
        })
    }
}

/// Request body for the create operation (POST /api/items)
///
/// # Fields
/// - `name`: Display name of the record
/// - `price`: Unit price
/// - any further fields are carried through to the stored record
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Additional fields stored verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateItemRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Some(format!(
                "Name exceeds maximum length of {} characters",
                MAX_NAME_LENGTH
            ));
        }
        if !self.price.is_finite() {
            return Some("Price must be a finite number".to_string());
        }
        if self.price < 0.0 {
            return Some("Price cannot be negative".to_string());
        }
        if self.extra.contains_key("id") {
            return Some("Id is assigned by the server".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        let params = ListParams::default();
        let opts = params.validate().unwrap();
        assert!(opts.query.is_none());
        assert_eq!(opts.offset, 0);
        assert!(opts.limit.is_none());
    }

    #[test]
    fn test_list_params_negative_offset_rejected() {
        let params = ListParams {
            offset: Some(-1),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_list_params_negative_limit_rejected() {
        let params = ListParams {
            limit: Some(-5),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_list_params_passthrough() {
        let params = ListParams {
            q: Some("mouse".to_string()),
            offset: Some(10),
            limit: Some(20),
        };
        let opts = params.validate().unwrap();
        assert_eq!(opts.query.as_deref(), Some("mouse"));
        assert_eq!(opts.offset, 10);
        assert_eq!(opts.limit, Some(20));
    }

    #[test]
    fn test_create_request_deserialize_with_extra() {
        let json = r#"{"name": "Webcam", "price": 59.0, "category": "video"}"#;
        let req: CreateItemRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Webcam");
        assert_eq!(req.price, 59.0);
        assert_eq!(req.extra["category"], "video");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_create_request_empty_name_rejected() {
        let req = CreateItemRequest {
            name: "   ".to_string(),
            price: 1.0,
            extra: Map::new(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_create_request_negative_price_rejected() {
        let req = CreateItemRequest {
            name: "Webcam".to_string(),
            price: -1.0,
            extra: Map::new(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_create_request_non_finite_price_rejected() {
        let req = CreateItemRequest {
            name: "Webcam".to_string(),
            price: f64::NAN,
            extra: Map::new(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_create_request_client_supplied_id_rejected() {
        let json = r#"{"name": "Webcam", "price": 59.0, "id": 7}"#;
        let req: CreateItemRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_some());
    }
}
