use serde::{Deserialize, Serialize};

use nexgen_core::{DomainError, DomainResult, Entity, MaterialId, TransactionId};

/// Goods movement direction.
///
/// Quantities and amounts are always non-negative; whether stock goes up or
/// down is carried here, never by sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "Goods Receipt")]
    GoodsReceipt,
    #[serde(rename = "Goods Issue")]
    GoodsIssue,
}

impl TransactionType {
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::GoodsReceipt => "Goods receipt (stock in)",
            TransactionType::GoodsIssue => "Goods issue (stock out)",
        }
    }

    /// +1 for movements that increase stock, -1 for those that decrease it.
    pub fn sign(self) -> f64 {
        match self {
            TransactionType::GoodsReceipt => 1.0,
            TransactionType::GoodsIssue => -1.0,
        }
    }

    pub fn sign_symbol(self) -> &'static str {
        match self {
            TransactionType::GoodsReceipt => "+",
            TransactionType::GoodsIssue => "-",
        }
    }
}

impl core::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.label())
    }
}

/// A recorded goods movement. Display-only: it is never posted to stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub material_id: MaterialId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub quantity: f64,
    pub amount: f64,
    /// Free-form display timestamp; never parsed.
    pub timestamp: String,
    pub cost_center: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<TransactionId>,
        material_id: impl Into<MaterialId>,
        kind: TransactionType,
        quantity: f64,
        amount: f64,
        timestamp: impl Into<String>,
        cost_center: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            material_id: material_id.into(),
            kind,
            quantity,
            amount,
            timestamp: timestamp.into(),
            cost_center: cost_center.into(),
        }
    }

    /// Quantity with the movement direction applied (for display).
    pub fn signed_quantity(&self) -> f64 {
        self.kind.sign() * self.quantity
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.id.validate()?;
        self.material_id.validate()?;
        DomainError::ensure_non_negative("quantity", self.quantity)?;
        DomainError::ensure_non_negative("amount", self.amount)?;
        Ok(())
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
