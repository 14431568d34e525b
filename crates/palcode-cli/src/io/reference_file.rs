// crates/palcode-cli/src/io/reference_file.rs

use anyhow::{Context, Result};
use palcode_core::reference::{parse_reference, reference_table};
use palcode_core::Rgb;

/// Load a reference palette (one color per line), or the embedded table.
pub fn load_reference(path: Option<&str>) -> Result<Vec<Rgb>> {
    let Some(path) = path else {
        return Ok(reference_table());
    };

    let text = std::fs::read_to_string(path).with_context(|| format!("read reference {path}"))?;
    let colors = parse_reference(&text).with_context(|| format!("parse reference {path}"))?;
    tracing::debug!(path, entries = colors.len(), "reference loaded");
    Ok(colors)
}

/// Label for reports: the path, or "embedded".
pub fn reference_label(path: Option<&str>) -> &str {
    path.unwrap_or("embedded")
}
