use analytics::blended_margin::calculate_blended_margin;
use analytics::{SimulatorInputs, ValidationEngine, simulate};
use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use configuration::Config;
use core_types::MarginView;
use export::{ExportPayload, verify_dashboard};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod render;

/// The main entry point for the Yolk validation engine.
fn main() -> anyhow::Result<()> {
    init_tracing();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    tracing::debug!(path = ?cli.config, "Configuration loaded.");

    // Execute the appropriate command; a bare `yolk` prints the full report.
    match cli.command.unwrap_or(Commands::Report(ReportArgs::default())) {
        Commands::Report(args) => handle_report(&config, args),
        Commands::Export => handle_export(&config),
        Commands::Simulate(args) => handle_simulate(&config, args),
        Commands::Verify => handle_verify(&config),
    }
}

/// Logs go to stderr so stdout only carries the report and the payload.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Computes and validates every figure shown on the egg-category dashboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// A TOML file layered over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full validation report followed by the export payload.
    Report(ReportArgs),
    /// Print only the JSON payload for the dashboard.
    Export,
    /// Run the P&L simulator with custom slider positions.
    Simulate(SimulateArgs),
    /// Check the dashboard's hardcoded constants against the pipeline.
    Verify,
}

#[derive(Args, Default)]
struct ReportArgs {
    /// Which margin the SKU matrix shows.
    #[arg(long, value_enum, default_value_t)]
    view: MarginView,
}

#[derive(Args)]
struct SimulateArgs {
    /// Daily orders.
    #[arg(long)]
    orders: Option<u64>,

    /// Ad income as a percent of GMV (e.g. 15).
    #[arg(long)]
    ad_rate: Option<Decimal>,

    /// Wastage as a percent of GMV (e.g. 2).
    #[arg(long)]
    wastage: Option<Decimal>,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_report(config: &Config, args: ReportArgs) -> anyhow::Result<()> {
    let report = ValidationEngine::new().run(config)?;
    let payload = ExportPayload::assemble(&report)?;

    print!("{}", render::render_report(&report, args.view)?);
    print!("{}", render::render_export_section(&payload.to_json()?)?);
    Ok(())
}

fn handle_export(config: &Config) -> anyhow::Result<()> {
    let report = ValidationEngine::new().run(config)?;
    println!("{}", ExportPayload::assemble(&report)?.to_json()?);
    Ok(())
}

fn handle_simulate(config: &Config, args: SimulateArgs) -> anyhow::Result<()> {
    let blend = calculate_blended_margin(&config.blended_margin);
    let mut inputs =
        SimulatorInputs::from_defaults(&config.simulator, &config.annual_pnl, blend.current);
    if let Some(orders) = args.orders {
        inputs.daily_orders = orders;
    }
    if let Some(ad_rate) = args.ad_rate {
        inputs.ad_rate_pct = ad_rate;
    }
    if let Some(wastage) = args.wastage {
        inputs.wastage_rate_pct = wastage;
    }

    let outcome = simulate(&inputs)?;
    print!("{}", render::render_simulation(&outcome)?);
    Ok(())
}

fn handle_verify(config: &Config) -> anyhow::Result<()> {
    let report = ValidationEngine::new().run(config)?;
    let payload = ExportPayload::assemble(&report)?;
    let parity = verify_dashboard(&payload, &config.dashboard);

    print!("{}", render::render_parity(&parity)?);
    let failures = parity.failures().count();
    if failures > 0 {
        bail!("{failures} dashboard constant(s) disagree with the pipeline");
    }
    Ok(())
}
