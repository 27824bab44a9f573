pub mod pagination;
pub mod stock;
