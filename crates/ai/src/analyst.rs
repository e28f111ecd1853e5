//! The analysis request façade.

use tracing::{debug, error, info};

use nexgen_accounting::CostRecord;
use nexgen_inventory::{Material, Transaction};

use crate::generator::TextGenerator;
use crate::prompt::{PromptOptions, build_prompt};

/// Text returned in place of a report whenever the request fails.
pub const ANALYSIS_FALLBACK_MESSAGE: &str =
    "Unable to retrieve the AI analysis report. Please check your system configuration.";

/// Builds the stock/cost prompt and delegates it to a [`TextGenerator`].
///
/// One request per [`analyze`](Self::analyze) call. There is no internal
/// deduplication: callers that must not overlap requests keep their own busy
/// flag.
#[derive(Debug, Clone)]
pub struct StockCostAnalyst<G> {
    generator: G,
    model: String,
    options: PromptOptions,
}

impl<G: TextGenerator> StockCostAnalyst<G> {
    pub fn new(generator: G, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            options: PromptOptions::default(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.options.language = language.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the generated text verbatim, or [`ANALYSIS_FALLBACK_MESSAGE`]
    /// if anything goes wrong. Never fails.
    pub async fn analyze(
        &self,
        materials: &[Material],
        costs: &[CostRecord],
        transactions: &[Transaction],
    ) -> String {
        let prompt = match build_prompt(materials, costs, transactions, &self.options) {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, "failed to build analysis prompt");
                return ANALYSIS_FALLBACK_MESSAGE.to_string();
            }
        };
        debug!(prompt_len = prompt.len(), "analysis prompt built");

        match self.generator.generate(&self.model, &prompt).await {
            Ok(text) => {
                info!(model = %self.model, chars = text.chars().count(), "analysis report received");
                text
            }
            Err(e) => {
                error!(model = %self.model, error = %e, "analysis request failed");
                ANALYSIS_FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
