// crates/palcode-cli/src/io/formula_file.rs

use anyhow::{Context, Result};
use palcode_core::formula::format as formula_format;
use palcode_core::Formula;

/// Load a formula JSON file, or the standard formula when no path is given.
pub fn load_formula(path: Option<&str>) -> Result<Formula> {
    let Some(path) = path else {
        return Ok(Formula::STANDARD);
    };

    let text = std::fs::read_to_string(path).with_context(|| format!("read formula {path}"))?;
    let formula =
        formula_format::formula_from_json(&text).with_context(|| format!("decode formula {path}"))?;

    if formula.is_standard() {
        tracing::debug!(path, "formula file matches the standard tables");
    } else {
        tracing::warn!(
            path,
            formula_id = %formula_format::formula_id_hex(&formula),
            "using non-standard formula"
        );
    }
    Ok(formula)
}

pub fn save_formula(path: &str, formula: &Formula) -> Result<()> {
    let mut json = formula_format::formula_to_json(formula)?;
    json.push('\n');
    std::fs::write(path, json).with_context(|| format!("write formula {path}"))?;
    Ok(())
}
