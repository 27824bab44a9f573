use crate::{
    domain::response::pagination::PaginationResult,
    model::stock::{Stock as StockModel, StocksResult},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StockResponse {
    pub stock_id: i64,
    pub name: String,
    pub price: i64,
    pub company: String,
}

impl From<StockModel> for StockResponse {
    fn from(value: StockModel) -> Self {
        StockResponse {
            stock_id: value.stock_id,
            name: value.name,
            price: value.price,
            company: value.company,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StocksResponse {
    pub stocks: Vec<StockResponse>,
    pub pagination: PaginationResult,
}

impl From<StocksResult> for StocksResponse {
    fn from(value: StocksResult) -> Self {
        StocksResponse {
            stocks: value.stocks.into_iter().map(StockResponse::from).collect(),
            pagination: value.pagination,
        }
    }
}

/// Body returned by create, update and delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockMessageResponse {
    pub id: i64,
    pub message: String,
}

impl StockMessageResponse {
    pub fn created(id: i64) -> Self {
        Self {
            id,
            message: "stock created successfully".to_string(),
        }
    }

    pub fn updated(id: i64, affected_rows: u64) -> Self {
        Self {
            id,
            message: format!(
                "Stock updated successfully. Total rows/records affected {affected_rows}"
            ),
        }
    }

    pub fn deleted(id: i64, deleted_rows: u64) -> Self {
        Self {
            id,
            message: format!(
                "Stock deleted successfully. Total rows/records affected {deleted_rows}"
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}
