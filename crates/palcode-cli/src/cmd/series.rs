// crates/palcode-cli/src/cmd/series.rs

use anyhow::Context;
use clap::{Args, ValueEnum};
use palcode_core::analyze::analyze;

use crate::io::{formula_file, reference_file, series};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SeriesFmt {
    Csv,
    Jsonl,
}

#[derive(Args, Debug)]
pub struct SeriesArgs {
    /// Reference palette file, one color per line (default: embedded table)
    #[arg(long)]
    pub reference: Option<String>,

    /// Formula JSON file (default: built-in tables)
    #[arg(long)]
    pub formula: Option<String>,

    #[arg(long, value_enum, default_value_t = SeriesFmt::Csv)]
    pub fmt: SeriesFmt,

    /// Output path (default: stdout)
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: SeriesArgs) -> anyhow::Result<()> {
    let formula = formula_file::load_formula(args.formula.as_deref())?;
    let reference = reference_file::load_reference(args.reference.as_deref())?;
    let report = analyze(&reference, &formula)?;

    let body = match args.fmt {
        SeriesFmt::Csv => series::render_csv(&report),
        SeriesFmt::Jsonl => series::render_jsonl(&report),
    };

    match args.out.as_deref() {
        Some(path) => {
            std::fs::write(path, body).with_context(|| format!("write series {path}"))?;
            tracing::info!(path, entries = report.entries.len(), "series written");
        }
        None => print!("{}", body),
    }
    Ok(())
}
