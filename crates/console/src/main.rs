use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use nexgen_ai::{GeminiBackend, StockCostAnalyst};
use nexgen_console::cli::{Cli, Command};
use nexgen_console::views::{AnalysisView, ControllingView, DashboardView, MaterialsView};
use nexgen_console::{AnalysisPanel, AppState, ConsoleConfig, seed};

fn load_state(path: Option<&Path>) -> anyhow::Result<AppState> {
    let Some(path) = path else {
        return seed::default_state().context("built-in dataset is invalid");
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    AppState::from_json_str(&json).with_context(|| format!("invalid seed file {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ConsoleConfig::from_env()?;
    nexgen_observability::init(config.log_format);

    let seed_path = cli.seed.clone().or_else(|| config.seed_path.clone());
    let state = load_state(seed_path.as_deref())?;
    info!(
        materials = state.materials().len(),
        costs = state.costs().len(),
        transactions = state.transactions().len(),
        "application state loaded"
    );

    match cli.command() {
        Command::Dashboard => print!("{}", DashboardView::new(&state)),
        Command::Mm { search } => print!("{}", MaterialsView::new(&state, search.as_deref())),
        Command::Co => print!("{}", ControllingView::new(&state)),
        Command::Analyze => {
            if config.ai.api_key.is_none() {
                warn!("GEMINI_API_KEY not set; the analysis will return the fallback message");
            }
            let analyst = StockCostAnalyst::new(GeminiBackend::from_config(&config.ai), config.ai.model.clone())
                .with_language(config.ai.report_language.clone());

            let mut panel = AnalysisPanel::new();
            panel.run(&analyst, &state).await;
            print!("{}", AnalysisView::new(&panel));
        }
    }

    Ok(())
}
