//! Read models behind the overview dashboard and the CO view.

use serde::Serialize;

use nexgen_accounting::{
    CostRecord, PriceEfficiency, high_variance_count, total_inventory_value,
};
use nexgen_core::MaterialId;
use nexgen_inventory::{Material, Transaction, low_stock_count};

use crate::lookup::MaterialLookup;

/// The four headline stat cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_inventory_value: f64,
    pub high_variance_items: usize,
    pub low_stock_items: usize,
    pub transaction_count: usize,
}

impl DashboardSummary {
    pub fn compute(
        materials: &[Material],
        costs: &[CostRecord],
        transactions: &[Transaction],
    ) -> Self {
        Self {
            total_inventory_value: total_inventory_value(costs),
            high_variance_items: high_variance_count(costs),
            low_stock_items: low_stock_count(materials),
            transaction_count: transactions.len(),
        }
    }
}

/// One bar pair of the planned-vs-actual chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostComparison {
    pub label: String,
    pub planned_cost: f64,
    pub actual_cost: f64,
}

/// Planned vs actual cost per record, in cost-record order.
pub fn cost_comparison_series(materials: &[Material], costs: &[CostRecord]) -> Vec<CostComparison> {
    let lookup = MaterialLookup::new(materials);
    costs
        .iter()
        .map(|c| CostComparison {
            label: lookup.label(&c.material_id).to_string(),
            planned_cost: c.planned_cost,
            actual_cost: c.actual_cost,
        })
        .collect()
}

/// One card of the CO view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    pub material_id: MaterialId,
    pub label: String,
    pub standard_price: f64,
    pub actual_price: f64,
    pub planned_cost: f64,
    pub actual_cost: f64,
    pub variance: f64,
    pub over_budget: bool,
    pub efficiency: PriceEfficiency,
}

pub fn cost_lines(materials: &[Material], costs: &[CostRecord]) -> Vec<CostLine> {
    let lookup = MaterialLookup::new(materials);
    costs
        .iter()
        .map(|c| CostLine {
            material_id: c.material_id.clone(),
            label: lookup.label(&c.material_id).to_string(),
            standard_price: c.standard_price,
            actual_price: c.actual_price,
            planned_cost: c.planned_cost,
            actual_cost: c.actual_cost,
            variance: c.variance(),
            over_budget: c.is_over_budget(),
            efficiency: c.price_efficiency(),
        })
        .collect()
}

/// Goods movements booked against one cost center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostCenterTotal {
    pub cost_center: String,
    pub transactions: usize,
    pub amount: f64,
}

/// Per cost-center movement count and amount, first-seen order.
pub fn cost_center_totals(transactions: &[Transaction]) -> Vec<CostCenterTotal> {
    let mut totals: Vec<CostCenterTotal> = Vec::new();
    for t in transactions {
        match totals.iter_mut().find(|c| c.cost_center == t.cost_center) {
            Some(total) => {
                total.transactions += 1;
                total.amount += t.amount;
            }
            None => totals.push(CostCenterTotal {
                cost_center: t.cost_center.clone(),
                transactions: 1,
                amount: t.amount,
            }),
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::UNKNOWN_MATERIAL_LABEL;
    use nexgen_inventory::{TransactionType, ValuationMethod};
    use proptest::prelude::*;

    fn materials() -> Vec<Material> {
        vec![
            Material::new("MAT001", "Raw Steel Plate", "Raw Materials", 450.0, 100.0, "kg", ValuationMethod::Standard),
            Material::new("MAT002", "Hydraulic Oil", "Consumables", 25.0, 50.0, "L", ValuationMethod::MovingAverage),
        ]
    }

    fn costs() -> Vec<CostRecord> {
        vec![
            CostRecord::new("MAT002", 45.0, 48.5, 1125.0, 2250.0, 1212.5),
            CostRecord::new("MAT001", 15.5, 16.2, 6975.0, 7000.0, 7290.0),
        ]
    }

    #[test]
    fn comparison_series_preserves_cost_order() {
        let series = cost_comparison_series(&materials(), &costs());
        let labels: Vec<&str> = series.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Hydraulic Oil", "Raw Steel Plate"]);
        assert_eq!(series[0].planned_cost, 2250.0);
        assert_eq!(series[0].actual_cost, 1212.5);
    }

    #[test]
    fn dangling_material_reference_gets_placeholder() {
        let costs = vec![CostRecord::new("MAT999", 1.0, 1.0, 10.0, 100.0, 120.0)];

        let series = cost_comparison_series(&materials(), &costs);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, UNKNOWN_MATERIAL_LABEL);

        let lines = cost_lines(&[], &costs);
        assert_eq!(lines[0].label, UNKNOWN_MATERIAL_LABEL);
        assert_eq!(lines[0].variance, 20.0);
        assert!(lines[0].over_budget);
    }

    #[test]
    fn cost_lines_carry_efficiency_and_classification() {
        let lines = cost_lines(&materials(), &costs());
        assert!(!lines[0].over_budget);
        assert_eq!(lines[0].variance, -1037.5);
        assert!((lines[1].efficiency.raw_percent() - 95.68).abs() < 0.01);
    }

    #[test]
    fn summary_over_empty_inputs_is_all_zero() {
        let s = DashboardSummary::compute(&[], &[], &[]);
        assert_eq!(s.total_inventory_value, 0.0);
        assert_eq!(s.high_variance_items, 0);
        assert_eq!(s.low_stock_items, 0);
        assert_eq!(s.transaction_count, 0);
        assert!(cost_comparison_series(&[], &[]).is_empty());
        assert!(cost_center_totals(&[]).is_empty());
    }

    #[test]
    fn summary_serializes_for_renderers() {
        let s = DashboardSummary::compute(&materials(), &costs(), &[]);
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["total_inventory_value"], 8100.0);
        assert_eq!(v["high_variance_items"], 1);
        assert_eq!(v["low_stock_items"], 1);
    }

    #[test]
    fn cost_centers_accumulate_in_first_seen_order() {
        let txs = vec![
            Transaction::new("T1", "MAT001", TransactionType::GoodsReceipt, 100.0, 1620.0, "t", "CC_PROD_01"),
            Transaction::new("T2", "MAT002", TransactionType::GoodsIssue, 5.0, 242.5, "t", "CC_MAINT_02"),
            Transaction::new("T3", "MAT001", TransactionType::GoodsIssue, 10.0, 162.0, "t", "CC_PROD_01"),
        ];

        let totals = cost_center_totals(&txs);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].cost_center, "CC_PROD_01");
        assert_eq!(totals[0].transactions, 2);
        assert_eq!(totals[0].amount, 1782.0);
        assert_eq!(totals[1].amount, 242.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: the comparison series has exactly one entry per cost record,
        /// whether or not the material resolves.
        #[test]
        fn series_has_one_entry_per_record(
            refs in prop::collection::vec(0u8..4u8, 0..20)
        ) {
            let mats = materials();
            let costs: Vec<CostRecord> = refs
                .iter()
                .map(|r| CostRecord::new(format!("MAT00{r}").as_str(), 1.0, 1.0, 1.0, 1.0, 1.0))
                .collect();

            let series = cost_comparison_series(&mats, &costs);
            prop_assert_eq!(series.len(), costs.len());
            for (entry, r) in series.iter().zip(refs.iter()) {
                let expected = match r {
                    1 => "Raw Steel Plate",
                    2 => "Hydraulic Oil",
                    _ => UNKNOWN_MATERIAL_LABEL,
                };
                prop_assert_eq!(entry.label.as_str(), expected);
            }
        }
    }
}
