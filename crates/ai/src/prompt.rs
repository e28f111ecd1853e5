//! Prompt construction for the stock/cost analysis request.

use nexgen_accounting::CostRecord;
use nexgen_inventory::{Material, Transaction};

use crate::config::DEFAULT_REPORT_LANGUAGE;
use crate::error::AiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    /// Language the report should be written in.
    pub language: String,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_REPORT_LANGUAGE.to_string(),
        }
    }
}

/// Build the analysis prompt from the current snapshot.
///
/// Deterministic: the same collections always produce the same text. Each
/// collection is embedded as compact JSON in its own order.
pub fn build_prompt(
    materials: &[Material],
    costs: &[CostRecord],
    transactions: &[Transaction],
    options: &PromptOptions,
) -> Result<String, AiError> {
    let materials = serde_json::to_string(materials)?;
    let costs = serde_json::to_string(costs)?;
    let transactions = serde_json::to_string(transactions)?;

    Ok(format!(
        "As an ERP consultant, analyze the following CO (Controlling) and MM (Materials Management) data:\n\
         \n\
         Materials: {materials}\n\
         Cost records: {costs}\n\
         Transactions: {transactions}\n\
         \n\
         Identify:\n\
         1. Key cost variances (planned vs actual).\n\
         2. Overstock or stockout risks.\n\
         3. Inventory valuation optimization suggestions.\n\
         \n\
         Provide your analysis as a concise, professional report in {language}.",
        language = options.language,
    ))
}
