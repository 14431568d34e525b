// crates/palcode-core/src/formula/format.rs
//
// JSON form of a Formula and stable fingerprints for formulas and palettes.

use crate::color::rgb::Rgb;
use crate::error::{PaletteError, Result};
use crate::formula::formula::Formula;

/// Parse a formula from JSON. The tables are validated during deserialization.
pub fn formula_from_json(s: &str) -> Result<Formula> {
    serde_json::from_str(s).map_err(|e| PaletteError::FormulaFormat(e.to_string()))
}

pub fn formula_to_json(f: &Formula) -> Result<String> {
    serde_json::to_string_pretty(f).map_err(|e| PaletteError::FormulaFormat(e.to_string()))
}

/// Canonical byte layout: base (u16 LE) x7, top (u16 LE) x7, hue codes x18.
pub fn canonical_bytes(f: &Formula) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 * 7 + 2 * 7 + 18);
    for v in f.base().iter().chain(f.top().iter()) {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out.extend_from_slice(f.hue_codes());
    out
}

/// First 16 bytes of BLAKE3 over the canonical bytes, as lowercase hex.
pub fn formula_id_hex(f: &Formula) -> String {
    let hash = blake3::hash(&canonical_bytes(f));
    hash.as_bytes()[..16]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// CRC-32 over the r,g,b bytes of every entry in order.
pub fn palette_crc32(colors: &[Rgb]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    for c in colors {
        h.update(&c.to_bytes());
    }
    h.finalize()
}
