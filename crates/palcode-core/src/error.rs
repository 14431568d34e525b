// crates/palcode-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaletteError>;

#[derive(Debug, Error)]
pub enum PaletteError {
    /// Index, band, slot or selector outside its valid range.
    #[error("domain violation: {0}")]
    DomainViolation(String),

    /// Reference table has the wrong length or a channel outside 0..=255.
    #[error("input shape error: {0}")]
    InputShape(String),

    /// Base/Top/HueCode tables that cannot produce 8-bit channels.
    #[error("degenerate table: {0}")]
    DegenerateTable(String),

    #[error("color parse error: {0}")]
    ParseColor(String),

    #[error("formula format error: {0}")]
    FormulaFormat(String),
}
