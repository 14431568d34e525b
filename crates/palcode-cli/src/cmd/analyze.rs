// crates/palcode-cli/src/cmd/analyze.rs

use clap::{Args, ValueEnum};
use palcode_core::analyze::analyze;
use palcode_core::formula::format::formula_id_hex;
use palcode_core::ErrorReport;

use crate::io::{formula_file, reference_file};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum AnalyzeFmt {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Reference palette file, one color per line (default: embedded table)
    #[arg(long)]
    pub reference: Option<String>,

    /// Formula JSON file (default: built-in tables)
    #[arg(long)]
    pub formula: Option<String>,

    /// Also list the N entries with the largest error
    #[arg(long, default_value_t = 0)]
    pub top: usize,

    /// Also print a per-band breakdown
    #[arg(long, default_value_t = false)]
    pub bands: bool,

    #[arg(long, value_enum, default_value_t = AnalyzeFmt::Text)]
    pub fmt: AnalyzeFmt,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let formula = formula_file::load_formula(args.formula.as_deref())?;
    let reference = reference_file::load_reference(args.reference.as_deref())?;
    let report = analyze(&reference, &formula)?;
    let fid = formula_id_hex(&formula);

    tracing::info!(
        formula_id = %fid,
        non_zero = report.summary.non_zero,
        "analysis complete"
    );

    match args.fmt {
        AnalyzeFmt::Text => print_text(&args, &fid, &report),
        AnalyzeFmt::Json => print_json(&args, &fid, &report)?,
    }
    Ok(())
}

fn print_text(args: &AnalyzeArgs, fid: &str, report: &ErrorReport) {
    let s = &report.summary;
    println!("--- analyze ---");
    println!("formula_id      = {}", fid);
    println!(
        "reference       = {}",
        reference_file::reference_label(args.reference.as_deref())
    );
    println!("mae             = {:.4}", s.mae);
    println!("max_error       = {}", s.max_error);
    println!("min_error       = {}", s.min_error);
    println!("non_zero        = {} (out of {} values)", s.non_zero, s.total);
    println!("percent_correct = {:.2}%", s.percent_correct);

    if args.bands {
        println!("--- bands ---");
        for b in report.band_summaries() {
            println!(
                "band={} mae={:.4} max={} min={} non_zero={}/{}",
                b.band,
                b.summary.mae,
                b.summary.max_error,
                b.summary.min_error,
                b.summary.non_zero,
                b.summary.total
            );
        }
    }

    if args.top > 0 {
        let worst = report.worst(args.top);
        println!("--- top {} entries ---", worst.len());
        for (i, e) in worst.iter().enumerate() {
            println!(
                "#{:>2} index={:>3} computed={} reference={} error=[{},{},{}]",
                i + 1,
                e.index,
                e.computed,
                e.reference,
                e.error[0],
                e.error[1],
                e.error[2]
            );
        }
    }
}

fn print_json(args: &AnalyzeArgs, fid: &str, report: &ErrorReport) -> anyhow::Result<()> {
    let mut out = serde_json::json!({
        "formula_id": fid,
        "reference": reference_file::reference_label(args.reference.as_deref()),
        "summary": report.summary,
    });
    if args.bands {
        out["bands"] = serde_json::to_value(report.band_summaries())?;
    }
    if args.top > 0 {
        out["worst"] = serde_json::to_value(report.worst(args.top))?;
    }
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
