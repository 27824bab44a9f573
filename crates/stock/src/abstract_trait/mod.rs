mod stock;

pub use self::stock::{DynStockStore, StockStoreTrait};
