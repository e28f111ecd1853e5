//! `nexgen-analytics` — dashboard read models derived from MM and CO data.
//!
//! Everything here is a pure function of read-only slices. Joins between cost
//! records and materials tolerate dangling references: a cost record whose
//! material is unknown is still reported, under a placeholder label.

pub mod dashboard;
pub mod lookup;

pub use dashboard::{
    CostCenterTotal, CostComparison, CostLine, DashboardSummary, cost_center_totals,
    cost_comparison_series, cost_lines,
};
pub use lookup::{MaterialLookup, UNKNOWN_MATERIAL_LABEL};
