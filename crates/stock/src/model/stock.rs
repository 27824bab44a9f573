use crate::domain::response::pagination::PaginationResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `stocks` table. `stock_id == 0` never identifies a stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Stock {
    #[sqlx(rename = "stockid")]
    pub stock_id: i64,
    pub name: String,
    pub price: i64,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StocksResult {
    pub stocks: Vec<Stock>,
    pub pagination: PaginationResult,
}
