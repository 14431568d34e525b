// crates/palcode-cli/src/cmd/encode.rs

use clap::{Args, ValueEnum};
use palcode_core::{ColorIndex, Formula, PaletteEncoder};

use crate::io::formula_file;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum EncodeFmt {
    /// One aligned row per entry
    Text,
    /// One JSON object per line
    Jsonl,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Encode only this index (0..=132). Default: all entries
    #[arg(long)]
    pub index: Option<usize>,

    /// Formula JSON file (default: built-in tables)
    #[arg(long)]
    pub formula: Option<String>,

    #[arg(long, value_enum, default_value_t = EncodeFmt::Text)]
    pub fmt: EncodeFmt,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let formula = formula_file::load_formula(args.formula.as_deref())?;

    let indices: Vec<ColorIndex> = match args.index {
        Some(i) => vec![ColorIndex::new(i)?],
        None => ColorIndex::all().collect(),
    };

    for idx in indices {
        print_entry(&formula, idx, args.fmt);
    }
    Ok(())
}

fn print_entry(formula: &Formula, idx: ColorIndex, fmt: EncodeFmt) {
    let c = formula.encode(idx);
    match fmt {
        EncodeFmt::Text => println!(
            "{:>3} band={} slot={:>2} {} ({:>3},{:>3},{:>3})",
            idx,
            idx.band(),
            idx.slot(),
            c,
            c.r,
            c.g,
            c.b
        ),
        EncodeFmt::Jsonl => println!(
            "{}",
            serde_json::json!({
                "index": idx,
                "band": idx.band(),
                "slot": idx.slot(),
                "hex": c.to_string(),
                "rgb": [c.r, c.g, c.b],
            })
        ),
    }
}
