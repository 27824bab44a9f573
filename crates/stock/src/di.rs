use crate::{abstract_trait::DynStockStore, repository::StockRepository};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub stock_store: DynStockStore,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("stock_store", &"DynStockStore")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let stock_store: DynStockStore = Arc::new(StockRepository::new(pool));

        Self { stock_store }
    }

    pub fn with_store(stock_store: DynStockStore) -> Self {
        Self { stock_store }
    }
}
