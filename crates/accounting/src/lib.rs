//! Controlling (CO) module: per-material cost records and variance analysis.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod cost;
pub mod efficiency;
pub mod summary;

pub use cost::CostRecord;
pub use efficiency::PriceEfficiency;
pub use summary::{HIGH_VARIANCE_THRESHOLD, high_variance_count, total_inventory_value};
