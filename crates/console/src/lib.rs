//! `nexgen-console` — terminal rendition of the CO-MM dashboard.
//!
//! Owns the application state (the three seed collections), the analysis
//! panel's busy flag and report text, and the text views rendered from the
//! analytics read models. Nothing here mutates materials, costs or
//! transactions after startup.

pub mod cli;
pub mod config;
pub mod format;
pub mod panel;
pub mod seed;
pub mod state;
pub mod views;

pub use config::{ConfigError, ConsoleConfig};
pub use panel::AnalysisPanel;
pub use state::AppState;
pub use views::ModuleView;
