use crate::{
    abstract_trait::StockStoreTrait,
    domain::{
        requests::stock::{CreateStockRequest, QueryPagination, UpdateStockRequest},
        response::pagination::PaginationResult,
    },
    model::stock::{Stock as StockModel, StocksResult},
    repository::query_builder::{Statement, StockCommand},
};
use async_trait::async_trait;
use sea_query_binder::SqlxValues;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

/// PostgreSQL-backed store. Every call is a single autocommit statement.
#[derive(Clone)]
pub struct StockRepository {
    db: ConnectionPool,
}

impl StockRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockStoreTrait for StockRepository {
    async fn create_stock(&self, req: &CreateStockRequest) -> Result<i64, RepositoryError> {
        let Statement { sql, values } = StockCommand::Insert(req).build()?;

        let stock_id = sqlx::query_scalar_with::<_, i64, _>(&sql, SqlxValues(values))
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to insert stock {}: {:?}", req.name, err);
                RepositoryError::query("insert stock data", err)
            })?;

        info!("✅ Created stock ID {}", stock_id);
        Ok(stock_id)
    }

    async fn get_stock(&self, stock_id: i64) -> Result<StockModel, RepositoryError> {
        let Statement { sql, values } = StockCommand::SelectOne(stock_id).build()?;

        let stock = sqlx::query_as_with::<_, StockModel, _>(&sql, SqlxValues(values))
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to query stock {}: {:?}", stock_id, err);
                RepositoryError::query(format!("query stock with stockid={stock_id}"), err)
            })?;

        match stock {
            Some(stock) if stock.stock_id != 0 => Ok(stock),
            _ => {
                info!("🔍 No stock found with ID {}", stock_id);
                Err(RepositoryError::NotFound(stock_id))
            }
        }
    }

    async fn get_all_stocks(
        &self,
        pagination: QueryPagination,
    ) -> Result<StocksResult, RepositoryError> {
        let pagination = pagination.normalized();
        info!(
            "🔍 Fetching stocks | offset: {}, limit: {}",
            pagination.offset, pagination.limit
        );

        let Statement { sql, values } = StockCommand::SelectAll(pagination).build()?;

        let stocks = sqlx::query_as_with::<_, StockModel, _>(&sql, SqlxValues(values))
            .fetch_all(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch stocks: {:?}", err);
                RepositoryError::query("query stock rows", err)
            })?;

        let pagination = PaginationResult::new(pagination, stocks.len());

        Ok(StocksResult { stocks, pagination })
    }

    async fn update_stock(
        &self,
        stock_id: i64,
        req: &UpdateStockRequest,
    ) -> Result<u64, RepositoryError> {
        let Statement { sql, values } = StockCommand::Update(stock_id, req).build()?;

        let result = sqlx::query_with(&sql, SqlxValues(values))
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update stock {}: {:?}", stock_id, err);
                RepositoryError::query(format!("update stock with stockid={stock_id}"), err)
            })?;

        info!(
            "🔄 Updated stock ID {} ({} rows affected)",
            stock_id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }

    async fn delete_stock(&self, stock_id: i64) -> Result<u64, RepositoryError> {
        let Statement { sql, values } = StockCommand::Delete(stock_id).build()?;

        let result = sqlx::query_with(&sql, SqlxValues(values))
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete stock {}: {:?}", stock_id, err);
                RepositoryError::query(format!("delete stock with stockid={stock_id}"), err)
            })?;

        info!(
            "🗑️ Deleted stock ID {} ({} rows removed)",
            stock_id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}
