use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStockRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Model S")]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "non_zero_price", message = "price is required and must be non-zero"))]
    #[schema(example = 250)]
    pub price: i64,

    #[serde(default)]
    #[validate(length(min = 1, message = "company is required"))]
    #[schema(example = "Tesla")]
    pub company: String,
}

/// Partial update. `None` leaves the column untouched; price is always written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStockRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty when provided"))]
    #[schema(example = "Model 3")]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "non_zero_price", message = "price is required and must be non-zero"))]
    #[schema(example = 300)]
    pub price: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "company must not be empty when provided"))]
    pub company: Option<String>,
}

/// Only zero is rejected: a missing price decodes to zero.
fn non_zero_price(price: i64) -> Result<(), ValidationError> {
    if price == 0 {
        return Err(ValidationError::new("non_zero"));
    }
    Ok(())
}

/// Raw `?limit=&offset=` values, parsed by the handler so malformed numbers
/// can be reported per parameter.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllStocks {
    #[param(value_type = Option<i64>, example = 10)]
    pub limit: Option<String>,

    #[param(value_type = Option<i64>, example = 0)]
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QueryPagination {
    pub offset: i64,
    pub limit: i64,
}

impl Default for QueryPagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryPagination {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Window actually applied by a store: non-positive limits fall back to
    /// [`DEFAULT_LIMIT`], negative offsets to zero.
    pub fn normalized(self) -> Self {
        Self {
            offset: self.offset.max(0),
            limit: if self.limit > 0 {
                self.limit
            } else {
                DEFAULT_LIMIT
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_out_of_range_window() {
        assert_eq!(
            QueryPagination::new(-3, 0).normalized(),
            QueryPagination::new(0, DEFAULT_LIMIT)
        );
        assert_eq!(
            QueryPagination::new(4, -1).normalized(),
            QueryPagination::new(4, DEFAULT_LIMIT)
        );
        assert_eq!(
            QueryPagination::new(5, 2).normalized(),
            QueryPagination::new(5, 2)
        );
    }

    #[test]
    fn create_request_reports_every_missing_field() {
        let req: CreateStockRequest = serde_json::from_str(r#"{"name": "Model S"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("company"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn update_request_only_requires_price() {
        let req: UpdateStockRequest = serde_json::from_str(r#"{"price": 12}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.name.is_none());
        assert!(req.company.is_none());

        let missing_price: UpdateStockRequest =
            serde_json::from_str(r#"{"name": "Model 3"}"#).unwrap();
        let errors = missing_price.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn price_only_has_to_be_non_zero() {
        let negative: CreateStockRequest =
            serde_json::from_str(r#"{"name": "a", "price": -5, "company": "c"}"#).unwrap();
        assert!(negative.validate().is_ok());

        let zero: CreateStockRequest =
            serde_json::from_str(r#"{"name": "a", "price": 0, "company": "c"}"#).unwrap();
        let errors = zero.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));

        let update: UpdateStockRequest = serde_json::from_str(r#"{"price": -1}"#).unwrap();
        assert!(update.validate().is_ok());
    }

    #[test]
    fn update_request_rejects_explicitly_empty_fields() {
        let req: UpdateStockRequest =
            serde_json::from_str(r#"{"price": 12, "company": ""}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("company"));
    }
}
