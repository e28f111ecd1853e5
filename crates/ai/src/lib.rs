//! `nexgen-ai`
//!
//! **Responsibility:** the analysis request boundary.
//!
//! This crate turns a read-only MM/CO snapshot into a single prompt, hands it
//! to an external text-generation service, and returns whatever text comes
//! back. It is intentionally **not** part of the domain model:
//! - It never mutates materials, cost records or transactions.
//! - Its one fallible call is absorbed at the [`StockCostAnalyst`] boundary;
//!   callers always receive text.

pub mod analyst;
pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod mock;
pub mod prompt;

pub use analyst::{ANALYSIS_FALLBACK_MESSAGE, StockCostAnalyst};
pub use config::AiConfig;
pub use error::AiError;
pub use gemini::GeminiBackend;
pub use generator::TextGenerator;
pub use mock::{GenerationCall, MockGenerator};
pub use prompt::{PromptOptions, build_prompt};
