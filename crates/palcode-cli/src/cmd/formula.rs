// crates/palcode-cli/src/cmd/formula.rs

use clap::{Args, Subcommand};
use palcode_core::encode::encode_all;
use palcode_core::formula::format::{formula_id_hex, formula_to_json, palette_crc32};
use palcode_core::index::{BAND_COUNT, SLOTS_PER_BAND};
use palcode_core::{Formula, Selector};

use crate::io::formula_file;

#[derive(Args)]
pub struct FormulaArgs {
    #[command(subcommand)]
    pub cmd: FormulaCmd,
}

#[derive(Subcommand)]
pub enum FormulaCmd {
    /// Print the tables, per-band levels and fingerprints
    Inspect(InspectArgs),
    /// Write the standard formula as JSON (a starting point for experiments)
    Dump(DumpArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    /// Formula JSON file (default: built-in tables)
    #[arg(long)]
    pub formula: Option<String>,
}

#[derive(Args)]
pub struct DumpArgs {
    /// Output path (default: stdout)
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: FormulaArgs) -> anyhow::Result<()> {
    match args.cmd {
        FormulaCmd::Inspect(a) => cmd_inspect(a),
        FormulaCmd::Dump(a) => cmd_dump(a),
    }
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let f: Formula = formula_file::load_formula(a.formula.as_deref())?;
    let palette = encode_all(&f);

    println!("formula_id    = {}", formula_id_hex(&f));
    println!("standard      = {}", f.is_standard());
    println!("palette_crc32 = {:08x}", palette_crc32(&palette));

    println!("--- bands ---");
    for band in 0..BAND_COUNT {
        let (lo, hi) = f.interval(band)?;
        let mut levels = [0u8; 4];
        for (c, slot) in levels.iter_mut().enumerate() {
            *slot = f.channel_value(band, Selector::new(c as u8)?)?;
        }
        println!(
            "band={} base={:>3} top={:>3} interval=[{:>3},{:>3}] levels={:?} gray={}",
            band,
            f.base()[band],
            f.top()[band],
            lo,
            hi,
            levels,
            palette[band * SLOTS_PER_BAND].r
        );
    }

    println!("--- hue codes ---");
    for slot in 1..SLOTS_PER_BAND {
        let h = f.hue_code(slot)?;
        println!(
            "slot={:>2} code=0b{:06b} r={} g={} b={}",
            slot,
            h.pack(),
            h.red.get(),
            h.green.get(),
            h.blue.get()
        );
    }
    Ok(())
}

fn cmd_dump(a: DumpArgs) -> anyhow::Result<()> {
    match a.out.as_deref() {
        Some(path) => formula_file::save_formula(path, &Formula::STANDARD)?,
        None => println!("{}", formula_to_json(&Formula::STANDARD)?),
    }
    Ok(())
}
