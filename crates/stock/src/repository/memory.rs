use crate::{
    abstract_trait::StockStoreTrait,
    domain::{
        requests::stock::{CreateStockRequest, QueryPagination, UpdateStockRequest},
        response::pagination::PaginationResult,
    },
    model::stock::{Stock as StockModel, StocksResult},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local store with the same observable behaviour as
/// [`StockRepository`](super::StockRepository). Ids start at 1.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, StockModel>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StockStoreTrait for InMemoryStockStore {
    async fn create_stock(&self, req: &CreateStockRequest) -> Result<i64, RepositoryError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let stock_id = inner.last_id;

        inner.rows.insert(
            stock_id,
            StockModel {
                stock_id,
                name: req.name.clone(),
                price: req.price,
                company: req.company.clone(),
            },
        );

        Ok(stock_id)
    }

    async fn get_stock(&self, stock_id: i64) -> Result<StockModel, RepositoryError> {
        self.inner
            .read()
            .await
            .rows
            .get(&stock_id)
            .filter(|stock| stock.stock_id != 0)
            .cloned()
            .ok_or(RepositoryError::NotFound(stock_id))
    }

    async fn get_all_stocks(
        &self,
        pagination: QueryPagination,
    ) -> Result<StocksResult, RepositoryError> {
        let pagination = pagination.normalized();
        let offset = usize::try_from(pagination.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(pagination.limit).unwrap_or(usize::MAX);

        let stocks: Vec<StockModel> = self
            .inner
            .read()
            .await
            .rows
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        let pagination = PaginationResult::new(pagination, stocks.len());

        Ok(StocksResult { stocks, pagination })
    }

    async fn update_stock(
        &self,
        stock_id: i64,
        req: &UpdateStockRequest,
    ) -> Result<u64, RepositoryError> {
        let mut inner = self.inner.write().await;

        let Some(stock) = inner.rows.get_mut(&stock_id) else {
            return Ok(0);
        };

        stock.price = req.price;
        if let Some(name) = &req.name {
            stock.name.clone_from(name);
        }
        if let Some(company) = &req.company {
            stock.company.clone_from(company);
        }

        Ok(1)
    }

    async fn delete_stock(&self, stock_id: i64) -> Result<u64, RepositoryError> {
        let removed = self.inner.write().await.rows.remove(&stock_id);
        Ok(u64::from(removed.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(n: i64) -> CreateStockRequest {
        CreateStockRequest {
            name: format!("stock-{n}"),
            price: 100 + n,
            company: format!("company-{n}"),
        }
    }

    async fn seeded(count: i64) -> InMemoryStockStore {
        let store = InMemoryStockStore::new();
        for n in 1..=count {
            store.create_stock(&create_request(n)).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn created_stock_can_be_read_back() {
        let store = InMemoryStockStore::new();
        let id = store.create_stock(&create_request(1)).await.unwrap();
        assert!(id > 0);

        let stock = store.get_stock(id).await.unwrap();
        assert_eq!(stock.name, "stock-1");
        assert_eq!(stock.price, 101);
        assert_eq!(stock.company, "company-1");
    }

    #[tokio::test]
    async fn zero_id_is_never_found() {
        let store = seeded(1).await;
        let err = store.get_stock(0).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn pages_walk_the_table_in_id_order() {
        let store = seeded(5).await;

        let first = store
            .get_all_stocks(QueryPagination::new(0, 2))
            .await
            .unwrap();
        let ids: Vec<i64> = first.stocks.iter().map(|s| s.stock_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(first.pagination.next_offset, Some(2));

        let last = store
            .get_all_stocks(QueryPagination::new(4, 2))
            .await
            .unwrap();
        assert_eq!(last.stocks.len(), 1);
        assert_eq!(last.stocks[0].stock_id, 5);
        assert_eq!(last.pagination.next_offset, Some(6));

        let past_end = store
            .get_all_stocks(QueryPagination::new(5, 2))
            .await
            .unwrap();
        assert!(past_end.stocks.is_empty());
        assert_eq!(past_end.pagination.next_offset, None);
    }

    #[tokio::test]
    async fn non_positive_limit_defaults_to_ten() {
        let store = seeded(12).await;
        let page = store
            .get_all_stocks(QueryPagination::new(-1, 0))
            .await
            .unwrap();

        assert_eq!(page.stocks.len(), 10);
        assert_eq!(page.pagination.offset, 0);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.next_offset, Some(10));
    }

    #[tokio::test]
    async fn price_only_update_preserves_other_fields() {
        let store = seeded(1).await;
        let req = UpdateStockRequest {
            price: 999,
            ..Default::default()
        };

        assert_eq!(store.update_stock(1, &req).await.unwrap(), 1);
        assert_eq!(store.update_stock(2, &req).await.unwrap(), 0);

        let stock = store.get_stock(1).await.unwrap();
        assert_eq!(stock.price, 999);
        assert_eq!(stock.name, "stock-1");
        assert_eq!(stock.company, "company-1");
    }

    #[tokio::test]
    async fn deleting_missing_stock_reports_zero_rows() {
        let store = seeded(1).await;

        assert_eq!(store.delete_stock(42).await.unwrap(), 0);
        assert_eq!(store.delete_stock(1).await.unwrap(), 1);
        assert!(store.get_stock(1).await.unwrap_err().is_not_found());
    }
}
