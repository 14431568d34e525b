// crates/palcode-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "palcode-cli")]
#[command(about = "133-color palette formula: encode entries and measure error against the reference table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print encoded palette entries (one index or all 133)
    Encode(cmd::encode::EncodeArgs),

    /// Compare the formula against the reference table and print summary statistics
    Analyze(cmd::analyze::AnalyzeArgs),

    /// Emit per-index red/green/blue error sequences (csv / jsonl)
    Series(cmd::series::SeriesArgs),

    /// Formula tools (inspect tables, dump the standard formula as JSON)
    Formula(cmd::formula::FormulaArgs),

    /// Tint a base color with a palette entry
    Tint(cmd::tint::TintArgs),
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palcode_core=warn,palcode_cli=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    // The built-in tables never go through Formula::new; check them before any work.
    palcode_core::validate::validate_formula(&palcode_core::Formula::STANDARD)?;

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Series(args) => cmd::series::run(args),
        Commands::Formula(args) => cmd::formula::run(args),
        Commands::Tint(args) => cmd::tint::run(args),
    }
}
