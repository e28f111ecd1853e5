use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// NexGen ERP: CO-MM integrated dashboard.
#[derive(Debug, Parser)]
#[command(name = "nexgen-erp", version, about)]
pub struct Cli {
    /// Load materials, costs and transactions from a JSON file instead of the
    /// built-in dataset.
    #[arg(long, global = true, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Stat cards, planned vs actual cost, category breakdown (default).
    Dashboard,
    /// Material master list and recent goods movements.
    Mm {
        /// Case-insensitive filter on material id or name.
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Cost records: variances and purchase price efficiency.
    Co,
    /// Ask the text-generation service for a cost/stock analysis report.
    Analyze,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Dashboard)
    }
}
