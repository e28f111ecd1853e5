use std::collections::HashMap;

use nexgen_core::MaterialId;
use nexgen_inventory::Material;

/// Label used when a cost record references a material that is not loaded.
pub const UNKNOWN_MATERIAL_LABEL: &str = "Unknown material";

/// Read-only index from material id to material.
///
/// If ids repeat, the first occurrence wins (matching a linear `find`).
#[derive(Debug)]
pub struct MaterialLookup<'a> {
    by_id: HashMap<&'a MaterialId, &'a Material>,
}

impl<'a> MaterialLookup<'a> {
    pub fn new(materials: &'a [Material]) -> Self {
        let mut by_id = HashMap::with_capacity(materials.len());
        for m in materials {
            by_id.entry(&m.id).or_insert(m);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &MaterialId) -> Option<&'a Material> {
        self.by_id.get(id).copied()
    }

    /// Material name, or [`UNKNOWN_MATERIAL_LABEL`] when the id does not resolve.
    pub fn label(&self, id: &MaterialId) -> &'a str {
        self.get(id).map_or(UNKNOWN_MATERIAL_LABEL, |m| m.name.as_str())
    }
}
