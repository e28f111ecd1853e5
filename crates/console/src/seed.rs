//! The fixed dataset the dashboard starts with.

use nexgen_accounting::CostRecord;
use nexgen_core::DomainResult;
use nexgen_inventory::{Material, Transaction, TransactionType, ValuationMethod};

use crate::state::AppState;

pub fn materials() -> Vec<Material> {
    vec![
        Material::new("MAT001", "Raw Steel Plate", "Raw Materials", 450.0, 100.0, "kg", ValuationMethod::Standard),
        Material::new("MAT002", "Hydraulic Oil", "Consumables", 25.0, 50.0, "L", ValuationMethod::MovingAverage),
        Material::new("MAT003", "Engine Assembly", "Semi-finished Goods", 120.0, 30.0, "pcs", ValuationMethod::Standard),
        Material::new("MAT004", "Sealing Tape", "Packaging", 800.0, 200.0, "rolls", ValuationMethod::MovingAverage),
    ]
}

pub fn costs() -> Vec<CostRecord> {
    vec![
        CostRecord::new("MAT001", 15.5, 16.2, 6975.0, 7000.0, 7290.0),
        CostRecord::new("MAT002", 45.0, 48.5, 1125.0, 2250.0, 1212.5),
        CostRecord::new("MAT003", 1200.0, 1150.0, 144000.0, 144000.0, 138000.0),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            "T001",
            "MAT001",
            TransactionType::GoodsReceipt,
            100.0,
            1620.0,
            "2024-10-25 09:00",
            "CC_PROD_01",
        ),
        Transaction::new(
            "T002",
            "MAT002",
            TransactionType::GoodsIssue,
            5.0,
            242.5,
            "2024-10-25 14:20",
            "CC_MAINT_02",
        ),
    ]
}

/// Application state over the built-in dataset.
pub fn default_state() -> DomainResult<AppState> {
    AppState::new(materials(), costs(), transactions())
}
