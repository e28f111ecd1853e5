use serde::{Deserialize, Serialize, Serializer};

use nexgen_core::{DomainError, DomainResult, MaterialId, ValueObject};

use crate::efficiency::PriceEfficiency;

/// Planned vs actual cost figures for one material.
///
/// Variance is derived on read from planned and actual cost, so it cannot
/// drift from them. A `variance` field in incoming JSON is ignored; outgoing
/// JSON always carries the derived value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    pub material_id: MaterialId,
    pub standard_price: f64,
    pub actual_price: f64,
    pub total_inventory_value: f64,
    pub planned_cost: f64,
    pub actual_cost: f64,
}

impl ValueObject for CostRecord {}

impl CostRecord {
    pub fn new(
        material_id: impl Into<MaterialId>,
        standard_price: f64,
        actual_price: f64,
        total_inventory_value: f64,
        planned_cost: f64,
        actual_cost: f64,
    ) -> Self {
        Self {
            material_id: material_id.into(),
            standard_price,
            actual_price,
            total_inventory_value,
            planned_cost,
            actual_cost,
        }
    }

    /// `actual_cost - planned_cost`. Positive means over budget.
    pub fn variance(&self) -> f64 {
        self.actual_cost - self.planned_cost
    }

    /// Strictly positive variance only; zero is on budget.
    pub fn is_over_budget(&self) -> bool {
        self.variance() > 0.0
    }

    /// Variance for display: over-budget amounts carry an explicit `+`.
    pub fn formatted_variance(&self) -> String {
        let v = self.variance();
        if self.is_over_budget() {
            format!("+{v}")
        } else {
            format!("{v}")
        }
    }

    pub fn price_efficiency(&self) -> PriceEfficiency {
        PriceEfficiency::new(self.standard_price, self.actual_price)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.material_id.validate()?;
        DomainError::ensure_non_negative("standard_price", self.standard_price)?;
        DomainError::ensure_non_negative("actual_price", self.actual_price)?;
        DomainError::ensure_non_negative("total_inventory_value", self.total_inventory_value)?;
        DomainError::ensure_finite("planned_cost", self.planned_cost)?;
        DomainError::ensure_finite("actual_cost", self.actual_cost)?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CostRecordWire<'a> {
    material_id: &'a MaterialId,
    standard_price: f64,
    actual_price: f64,
    total_inventory_value: f64,
    planned_cost: f64,
    actual_cost: f64,
    variance: f64,
}

impl Serialize for CostRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CostRecordWire {
            material_id: &self.material_id,
            standard_price: self.standard_price,
            actual_price: self.actual_price,
            total_inventory_value: self.total_inventory_value,
            planned_cost: self.planned_cost,
            actual_cost: self.actual_cost,
            variance: self.variance(),
        }
        .serialize(serializer)
    }
}
