//! Materials Management (MM) module.
//!
//! Material master data, goods movements, and the stock-side aggregations the
//! dashboard derives from them. Pure domain logic only: no IO, no storage,
//! and nothing here mutates stock levels.

pub mod material;
pub mod stock;
pub mod transaction;

pub use material::{Material, ValuationMethod};
pub use stock::{
    CategoryCount, StockStatus, category_distribution, low_stock_count, search_materials,
};
pub use transaction::{Transaction, TransactionType};
