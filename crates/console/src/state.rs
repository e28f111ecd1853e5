use std::collections::HashSet;

use serde::Deserialize;

use nexgen_accounting::CostRecord;
use nexgen_analytics::DashboardSummary;
use nexgen_core::{DomainError, DomainResult, Entity};
use nexgen_inventory::{Material, Transaction};

/// The application's owned data: materials, cost records and goods movements.
///
/// Built once at startup and handed out by reference. There are no mutation
/// entry points; views and the analysis façade only ever see slices.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    materials: Vec<Material>,
    costs: Vec<CostRecord>,
    transactions: Vec<Transaction>,
}

/// JSON seed file shape: `{ "materials": [...], "costs": [...], "transactions": [...] }`.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    materials: Vec<Material>,
    #[serde(default)]
    costs: Vec<CostRecord>,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl AppState {
    /// Validate and take ownership of a snapshot.
    ///
    /// Rejects duplicate material/transaction ids and invalid field values.
    /// References to unknown materials are accepted; the views label them as
    /// unknown.
    pub fn new(
        materials: Vec<Material>,
        costs: Vec<CostRecord>,
        transactions: Vec<Transaction>,
    ) -> DomainResult<Self> {
        ensure_unique_ids(&materials, "material")?;
        ensure_unique_ids(&transactions, "transaction")?;

        for m in &materials {
            m.validate()?;
        }
        for c in &costs {
            c.validate()?;
        }
        for t in &transactions {
            t.validate()?;
        }

        Ok(Self {
            materials,
            costs,
            transactions,
        })
    }

    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let seed: SeedFile = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed seed data: {e}")))?;
        Self::new(seed.materials, seed.costs, seed.transactions)
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn costs(&self) -> &[CostRecord] {
        &self.costs
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.materials, &self.costs, &self.transactions)
    }
}

fn ensure_unique_ids<E: Entity>(records: &[E], kind: &str) -> DomainResult<()>
where
    E::Id: core::fmt::Display,
{
    let mut seen = HashSet::with_capacity(records.len());
    for r in records {
        if !seen.insert(r.id()) {
            return Err(DomainError::conflict(format!("duplicate {kind} id {}", r.id())));
        }
    }
    Ok(())
}
