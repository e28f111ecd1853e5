//! Caller-side state of the AI analysis panel.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use nexgen_ai::{StockCostAnalyst, TextGenerator};

use crate::state::AppState;

/// Busy flag plus the last report.
///
/// The façade does no deduplication of its own, so the panel refuses to start
/// a second request while one is in flight.
#[derive(Debug, Clone, Default)]
pub struct AnalysisPanel {
    in_progress: bool,
    report: Option<String>,
    completed_at: Option<DateTime<Utc>>,
}

impl AnalysisPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Mark a request as started. Returns `false` if one is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_progress {
            return false;
        }
        self.in_progress = true;
        true
    }

    /// Store the finished report and clear the busy flag.
    pub fn complete(&mut self, report: String) {
        self.report = Some(report);
        self.completed_at = Some(Utc::now());
        self.in_progress = false;
    }

    /// Close the report.
    pub fn dismiss(&mut self) {
        self.report = None;
        self.completed_at = None;
    }

    /// Run one analysis over `state`. Returns `false` without issuing a
    /// request when another run is still marked in progress.
    pub async fn run<G: TextGenerator>(
        &mut self,
        analyst: &StockCostAnalyst<G>,
        state: &AppState,
    ) -> bool {
        if !self.try_begin() {
            warn!("analysis already in progress; ignoring request");
            return false;
        }

        let report = analyst
            .analyze(state.materials(), state.costs(), state.transactions())
            .await;
        self.complete(report);
        info!(model = analyst.model(), "analysis panel updated");
        true
    }
}
