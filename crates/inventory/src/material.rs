use serde::{Deserialize, Serialize};

use nexgen_core::{DomainError, DomainResult, Entity, MaterialId};

/// Inventory valuation method assigned to a material.
///
/// Only the label is modeled; no valuation is computed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuationMethod {
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Moving Average")]
    MovingAverage,
}

impl ValuationMethod {
    pub fn label(self) -> &'static str {
        match self {
            ValuationMethod::Standard => "Standard price valuation",
            ValuationMethod::MovingAverage => "Moving average valuation",
        }
    }
}

impl core::fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.label())
    }
}

/// Material master record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    /// Free-text grouping label (e.g. "Raw Materials").
    pub category: String,
    pub stock_level: f64,
    pub reorder_point: f64,
    /// Unit of measure label (e.g. "kg").
    pub unit: String,
    #[serde(rename = "valuationType")]
    pub valuation: ValuationMethod,
}

impl Material {
    pub fn new(
        id: impl Into<MaterialId>,
        name: impl Into<String>,
        category: impl Into<String>,
        stock_level: f64,
        reorder_point: f64,
        unit: impl Into<String>,
        valuation: ValuationMethod,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            stock_level,
            reorder_point,
            unit: unit.into(),
            valuation,
        }
    }

    /// At or below the reorder point counts as low; the reorder point itself
    /// triggers the warning.
    pub fn is_low_stock(&self) -> bool {
        self.stock_level <= self.reorder_point
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.id.validate()?;
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "material {} has an empty name",
                self.id
            )));
        }
        DomainError::ensure_non_negative("stock_level", self.stock_level)?;
        DomainError::ensure_non_negative("reorder_point", self.reorder_point)?;
        Ok(())
    }
}

impl Entity for Material {
    type Id = MaterialId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
