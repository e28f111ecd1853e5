//! Stock-side aggregations over material master data.
//!
//! All functions are total: empty input yields zero/empty output and nothing
//! is mutated.

use serde::Serialize;

use crate::material::Material;

/// Replenishment status shown next to each material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StockStatus {
    ReorderSuggested,
    Sufficient,
}

impl StockStatus {
    pub fn of(material: &Material) -> Self {
        if material.is_low_stock() {
            StockStatus::ReorderSuggested
        } else {
            StockStatus::Sufficient
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::ReorderSuggested => "Reorder suggested",
            StockStatus::Sufficient => "Stock sufficient",
        }
    }
}

impl Material {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::of(self)
    }
}

/// Number of materials at or below their reorder point.
pub fn low_stock_count(materials: &[Material]) -> usize {
    materials.iter().filter(|m| m.is_low_stock()).count()
}

/// One slice of the category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Group materials by category, keeping first-seen order (not sorted).
pub fn category_distribution(materials: &[Material]) -> Vec<CategoryCount> {
    let mut groups: Vec<CategoryCount> = Vec::new();
    for m in materials {
        match groups.iter_mut().find(|g| g.category == m.category) {
            Some(group) => group.count += 1,
            None => groups.push(CategoryCount {
                category: m.category.clone(),
                count: 1,
            }),
        }
    }
    groups
}

/// Case-insensitive substring search over material name and id.
///
/// An empty (or whitespace-only) term matches everything.
pub fn search_materials<'a>(materials: &'a [Material], term: &str) -> Vec<&'a Material> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return materials.iter().collect();
    }
    materials
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&needle)
                || m.id.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::ValuationMethod;
    use proptest::prelude::*;

    fn material(id: &str, name: &str, category: &str, stock: f64, reorder: f64) -> Material {
        Material::new(id, name, category, stock, reorder, "pcs", ValuationMethod::Standard)
    }

    #[test]
    fn reorder_point_itself_counts_as_low_stock() {
        let at = material("M1", "At", "A", 50.0, 50.0);
        let above = material("M2", "Above", "A", 51.0, 50.0);

        assert!(at.is_low_stock());
        assert!(!above.is_low_stock());
        assert_eq!(low_stock_count(&[at.clone(), above.clone()]), 1);
        assert_eq!(at.stock_status(), StockStatus::ReorderSuggested);
        assert_eq!(above.stock_status(), StockStatus::Sufficient);
    }

    #[test]
    fn empty_inputs_yield_empty_results() {
        assert_eq!(low_stock_count(&[]), 0);
        assert!(category_distribution(&[]).is_empty());
        assert!(search_materials(&[], "steel").is_empty());
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let materials = vec![
            material("M1", "a", "A", 1.0, 0.0),
            material("M2", "b", "B", 1.0, 0.0),
            material("M3", "c", "A", 1.0, 0.0),
            material("M4", "d", "C", 1.0, 0.0),
        ];

        let dist = category_distribution(&materials);
        let pairs: Vec<(&str, usize)> = dist.iter().map(|c| (c.category.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("A", 2), ("B", 1), ("C", 1)]);
    }

    #[test]
    fn search_matches_name_or_id_case_insensitively() {
        let materials = vec![
            material("MAT001", "Raw Steel Plate", "Raw Materials", 450.0, 100.0),
            material("MAT002", "Hydraulic Oil", "Consumables", 25.0, 50.0),
        ];

        let by_name: Vec<&str> = search_materials(&materials, "STEEL")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(by_name, vec!["MAT001"]);

        let by_id = search_materials(&materials, "mat002");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].name, "Hydraulic Oil");

        assert_eq!(search_materials(&materials, "  ").len(), 2);
        assert!(search_materials(&materials, "copper").is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: category counts always add up to the number of materials,
        /// and no category appears twice.
        #[test]
        fn category_counts_partition_the_input(
            cats in prop::collection::vec(0u8..5u8, 0..30)
        ) {
            let materials: Vec<Material> = cats
                .iter()
                .enumerate()
                .map(|(i, c)| material(&format!("M{i}"), "x", &format!("C{c}"), 1.0, 0.0))
                .collect();

            let dist = category_distribution(&materials);
            let total: usize = dist.iter().map(|c| c.count).sum();
            prop_assert_eq!(total, materials.len());

            let mut names: Vec<&str> = dist.iter().map(|c| c.category.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), dist.len());
        }

        /// Property: low-stock count never exceeds the number of materials and
        /// matches a direct `<=` filter.
        #[test]
        fn low_stock_count_matches_inclusive_threshold(
            levels in prop::collection::vec((0u32..1000u32, 0u32..1000u32), 0..30)
        ) {
            let materials: Vec<Material> = levels
                .iter()
                .enumerate()
                .map(|(i, (s, r))| material(&format!("M{i}"), "x", "A", *s as f64, *r as f64))
                .collect();

            let expected = levels.iter().filter(|(s, r)| s <= r).count();
            prop_assert_eq!(low_stock_count(&materials), expected);
        }
    }
}
