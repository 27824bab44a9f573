use crate::{
    domain::requests::stock::{CreateStockRequest, QueryPagination, UpdateStockRequest},
    model::stock::{Stock as StockModel, StocksResult},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynStockStore = Arc<dyn StockStoreTrait + Send + Sync>;

#[async_trait]
pub trait StockStoreTrait {
    /// Inserts a stock and returns the id assigned by the backend.
    async fn create_stock(&self, req: &CreateStockRequest) -> Result<i64, RepositoryError>;

    /// Fails with [`RepositoryError::NotFound`] when no row matches.
    async fn get_stock(&self, stock_id: i64) -> Result<StockModel, RepositoryError>;

    async fn get_all_stocks(
        &self,
        pagination: QueryPagination,
    ) -> Result<StocksResult, RepositoryError>;

    /// Returns the number of rows modified; zero means the id did not exist.
    async fn update_stock(
        &self,
        stock_id: i64,
        req: &UpdateStockRequest,
    ) -> Result<u64, RepositoryError>;

    /// Returns the number of rows removed; zero means the id did not exist.
    async fn delete_stock(&self, stock_id: i64) -> Result<u64, RepositoryError>;
}
