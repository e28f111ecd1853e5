//! Text views of the dashboard, MM and CO modules.
//!
//! Each view borrows the application state and renders through `Display`, so
//! the binary just prints it and tests compare strings.

use core::fmt;

use nexgen_analytics::{cost_center_totals, cost_comparison_series, cost_lines};
use nexgen_inventory::{Material, category_distribution, search_materials};

use crate::format::{currency, gauge, number};
use crate::panel::AnalysisPanel;
use crate::state::AppState;

const GAUGE_WIDTH: usize = 20;

/// Navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleView {
    Dashboard,
    Materials,
    Controlling,
}

impl ModuleView {
    pub fn title(self) -> &'static str {
        match self {
            ModuleView::Dashboard => "Overview Dashboard",
            ModuleView::Materials => "Materials Management (MM)",
            ModuleView::Controlling => "Cost Controlling (CO)",
        }
    }
}

fn heading(f: &mut fmt::Formatter<'_>, view: ModuleView) -> fmt::Result {
    let title = view.title();
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(title.chars().count()))
}

pub struct DashboardView<'a> {
    state: &'a AppState,
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.state;
        let summary = s.summary();

        heading(f, ModuleView::Dashboard)?;
        writeln!(f, "{:<26}{}", "Total inventory value", currency(summary.total_inventory_value))?;
        writeln!(
            f,
            "{:<26}{:<6}needs adjustment in CO",
            "High-variance items", summary.high_variance_items
        )?;
        writeln!(
            f,
            "{:<26}{:<6}start MRP replenishment planning",
            "Low-stock items", summary.low_stock_items
        )?;
        writeln!(f, "{:<26}{}", "Transactions (24h)", summary.transaction_count)?;

        writeln!(f)?;
        writeln!(f, "Planned vs actual cost")?;
        for c in cost_comparison_series(s.materials(), s.costs()) {
            writeln!(
                f,
                "  {:<22} planned {:>12}  actual {:>12}",
                c.label,
                number(c.planned_cost),
                number(c.actual_cost)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Material categories")?;
        for c in category_distribution(s.materials()) {
            writeln!(f, "  {:<22} {}", c.category, c.count)?;
        }
        Ok(())
    }
}

pub struct MaterialsView<'a> {
    state: &'a AppState,
    search: Option<&'a str>,
}

impl<'a> MaterialsView<'a> {
    pub fn new(state: &'a AppState, search: Option<&'a str>) -> Self {
        Self { state, search }
    }

    fn visible(&self) -> Vec<&'a Material> {
        search_materials(self.state.materials(), self.search.unwrap_or_default())
    }
}

impl fmt::Display for MaterialsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, ModuleView::Materials)?;

        let visible = self.visible();
        if visible.is_empty() {
            writeln!(f, "No materials match.")?;
        }
        for m in visible {
            writeln!(
                f,
                "{:<8} {:<20} {:<20} {:>8} {:<6} reorder at {:<6} {:<26} {}",
                m.id,
                m.name,
                m.category,
                number(m.stock_level),
                m.unit,
                number(m.reorder_point),
                m.valuation.label(),
                m.stock_status().label()
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Recent goods movements")?;
        for t in self.state.transactions() {
            writeln!(
                f,
                "  {:<6} {:<26} {:<8} {}{:<8} {:>10}  {:<12} {}",
                t.id,
                t.kind.label(),
                t.material_id,
                t.kind.sign_symbol(),
                number(t.quantity),
                currency(t.amount),
                t.cost_center,
                t.timestamp
            )?;
        }
        Ok(())
    }
}

pub struct ControllingView<'a> {
    state: &'a AppState,
}

impl<'a> ControllingView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl fmt::Display for ControllingView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.state;
        heading(f, ModuleView::Controlling)?;

        for line in cost_lines(s.materials(), s.costs()) {
            let status = if line.over_budget { "over budget" } else { "within budget" };
            let variance = if line.over_budget {
                format!("+{}", number(line.variance))
            } else {
                number(line.variance)
            };

            writeln!(f, "{} ({})", line.label, line.material_id)?;
            writeln!(
                f,
                "  standard price {:>10}   actual price {:>10}",
                number(line.standard_price),
                number(line.actual_price)
            )?;
            writeln!(
                f,
                "  planned cost   {:>10}   actual cost  {:>10}   variance {variance} ({status})",
                number(line.planned_cost),
                number(line.actual_cost)
            )?;
            writeln!(
                f,
                "  price efficiency {} {}",
                gauge(line.efficiency.gauge_percent(), GAUGE_WIDTH),
                line.efficiency
            )?;
        }

        let centers = cost_center_totals(s.transactions());
        if !centers.is_empty() {
            writeln!(f)?;
            writeln!(f, "Cost centers")?;
            for c in centers {
                writeln!(
                    f,
                    "  {:<14} {} movement(s)  {}",
                    c.cost_center,
                    c.transactions,
                    currency(c.amount)
                )?;
            }
        }
        Ok(())
    }
}

pub struct AnalysisView<'a> {
    panel: &'a AnalysisPanel,
}

impl<'a> AnalysisView<'a> {
    pub fn new(panel: &'a AnalysisPanel) -> Self {
        Self { panel }
    }
}

impl fmt::Display for AnalysisView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.panel.is_in_progress() {
            return writeln!(f, "AI analysis in progress...");
        }
        let Some(report) = self.panel.report() else {
            return Ok(());
        };

        writeln!(f, "AI integrated analysis report")?;
        if let Some(at) = self.panel.completed_at() {
            writeln!(f, "generated {}", at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        }
        writeln!(f)?;
        writeln!(f, "{report}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn dashboard_shows_seed_stat_cards() {
        let state = seed::default_state().unwrap();
        let out = DashboardView::new(&state).to_string();

        assert!(out.starts_with("Overview Dashboard\n"));
        assert!(out.contains("$152,100"));
        assert!(out.contains("Raw Steel Plate"));
        assert!(out.contains("Semi-finished Goods"));
    }

    #[test]
    fn materials_view_filters_and_flags_low_stock() {
        let state = seed::default_state().unwrap();

        let out = MaterialsView::new(&state, Some("oil")).to_string();
        assert!(out.contains("Hydraulic Oil"));
        assert!(out.contains("Reorder suggested"));
        assert!(!out.contains("Raw Steel Plate"));
        assert!(out.contains("+100"));
        assert!(out.contains("-5"));

        let none = MaterialsView::new(&state, Some("zzz")).to_string();
        assert!(none.contains("No materials match."));
    }

    #[test]
    fn controlling_view_marks_sign_and_efficiency() {
        let state = seed::default_state().unwrap();
        let out = ControllingView::new(&state).to_string();

        assert!(out.contains("variance +290 (over budget)"));
        assert!(out.contains("variance -1,037.5 (within budget)"));
        assert!(out.contains("95.7%"));
        assert!(out.contains("104.3%"));
        assert!(out.contains("CC_PROD_01"));
    }

    #[test]
    fn analysis_view_is_empty_until_a_report_exists() {
        let mut panel = AnalysisPanel::new();
        assert_eq!(AnalysisView::new(&panel).to_string(), "");

        panel.complete("Steel over plan".to_string());
        let out = AnalysisView::new(&panel).to_string();
        assert!(out.contains("AI integrated analysis report"));
        assert!(out.ends_with("Steel over plan\n"));
    }

    #[test]
    fn titles_are_distinct() {
        let titles = [
            ModuleView::Dashboard.title(),
            ModuleView::Materials.title(),
            ModuleView::Controlling.title(),
        ];
        assert_eq!(titles.len(), 3);
        assert_ne!(titles[0], titles[1]);
        assert_ne!(titles[1], titles[2]);
    }
}
