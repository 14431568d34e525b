// crates/palcode-cli/src/cmd/tint.rs

use clap::Args;
use palcode_core::color::tint::tint;
use palcode_core::{ColorIndex, PaletteEncoder, Rgb};

use crate::io::formula_file;

#[derive(Args, Debug)]
pub struct TintArgs {
    /// Palette index (0..=132)
    #[arg(long)]
    pub index: usize,

    /// Template pixel color: #RRGGBB, 0xRRGGBB, RRGGBB or r,g,b
    #[arg(long)]
    pub base: String,

    /// Formula JSON file (default: built-in tables)
    #[arg(long)]
    pub formula: Option<String>,
}

pub fn run(args: TintArgs) -> anyhow::Result<()> {
    let formula = formula_file::load_formula(args.formula.as_deref())?;
    let idx = ColorIndex::new(args.index)?;
    let base = Rgb::parse(&args.base)?;

    let color = formula.encode(idx);
    let out = tint(base, color);

    println!("index  = {}", idx);
    println!("color  = {}", color);
    println!("base   = {}", base);
    println!("tinted = {}", out);
    Ok(())
}
