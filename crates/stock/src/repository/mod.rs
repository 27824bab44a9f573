mod memory;
mod query_builder;
mod stock;

pub use self::memory::InMemoryStockStore;
pub use self::query_builder::{Statement, StockCommand};
pub use self::stock::StockRepository;
