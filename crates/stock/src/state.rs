use crate::{abstract_trait::DynStockStore, di::DependenciesInject};
use prometheus_client::registry::Registry;
use shared::{config::ConnectionPool, utils::Metrics};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub metrics: Arc<Metrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::from_container(DependenciesInject::new(pool))
    }

    /// Builds the state around an arbitrary store, e.g. the in-memory one.
    pub fn with_store(store: DynStockStore) -> Self {
        Self::from_container(DependenciesInject::with_store(store))
    }

    fn from_container(di_container: DependenciesInject) -> Self {
        let mut registry = Registry::default();
        let metrics = Arc::new(Metrics::new());
        metrics.register(&mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            metrics,
        }
    }
}
