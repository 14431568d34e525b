// crates/palcode-core/src/analyze/analyzer.rs

use crate::analyze::report::{ErrorEntry, ErrorReport};
use crate::color::rgb::Rgb;
use crate::encode::PaletteEncoder;
use crate::error::{PaletteError, Result};
use crate::formula::formula::Formula;
use crate::index::{ColorIndex, COLOR_COUNT};
use crate::reference::reference_table;

/// Compare `encoder` against `reference` over all 133 indices.
///
/// `reference` must hold exactly one color per index; anything else is an
/// `InputShape` error and nothing is aggregated.
pub fn analyze<E: PaletteEncoder + ?Sized>(reference: &[Rgb], encoder: &E) -> Result<ErrorReport> {
    if reference.len() != COLOR_COUNT {
        return Err(PaletteError::InputShape(format!(
            "reference has {} entries, expected {}",
            reference.len(),
            COLOR_COUNT
        )));
    }

    let entries: Vec<ErrorEntry> = ColorIndex::all()
        .zip(reference.iter())
        .map(|(idx, &want)| ErrorEntry::new(idx, encoder.encode(idx), want))
        .collect();

    let report = ErrorReport::from_entries(entries);
    tracing::debug!(
        mae = report.summary.mae,
        max = report.summary.max_error,
        min = report.summary.min_error,
        non_zero = report.summary.non_zero,
        "palette analyzed"
    );
    Ok(report)
}

/// Like [`analyze`], for a reference given as 24-bit `0xRRGGBB` values.
pub fn analyze_hex<E: PaletteEncoder + ?Sized>(reference: &[u32], encoder: &E) -> Result<ErrorReport> {
    let colors = reference
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Rgb::from_hex24(v).map_err(|e| PaletteError::InputShape(format!("entry {}: {}", i, e)))
        })
        .collect::<Result<Vec<Rgb>>>()?;
    analyze(&colors, encoder)
}

/// The standard formula against the embedded reference table.
pub fn analyze_standard() -> Result<ErrorReport> {
    analyze(&reference_table(), &Formula::STANDARD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_all;
    use crate::reference::REFERENCE_HEX;

    /// Plays the reference table back verbatim.
    struct TableEncoder(Vec<Rgb>);

    impl PaletteEncoder for TableEncoder {
        fn encode(&self, index: ColorIndex) -> Rgb {
            self.0[index.get()]
        }
    }

    #[test]
    fn self_comparison_is_exact() {
        let palette = encode_all(&Formula::STANDARD);
        let report = analyze(&palette, &Formula::STANDARD).unwrap();
        let s = &report.summary;
        assert_eq!(s.mae, 0.0);
        assert_eq!((s.max_error, s.min_error), (0, 0));
        assert_eq!(s.non_zero, 0);
        assert_eq!(s.total, 399);
        assert_eq!(s.percent_correct, 100.0);
    }

    #[test]
    fn lookup_encoder_matches_reference() {
        let enc = TableEncoder(reference_table());
        let report = analyze_hex(&REFERENCE_HEX, &enc).unwrap();
        assert!(report.entries.iter().all(ErrorEntry::is_exact));
    }

    #[test]
    fn rejects_wrong_length() {
        let mut t = reference_table();
        t.pop();
        let err = analyze(&t, &Formula::STANDARD).unwrap_err();
        assert!(matches!(err, PaletteError::InputShape(_)));
        assert!(err.to_string().contains("132 entries"));

        assert!(analyze(&[], &Formula::STANDARD).is_err());
    }

    #[test]
    fn hex_rejects_wide_values() {
        let mut hex = REFERENCE_HEX.to_vec();
        hex[7] = 0x0100_0000;
        let err = analyze_hex(&hex, &Formula::STANDARD).unwrap_err();
        assert!(matches!(err, PaletteError::InputShape(_)));
        assert!(err.to_string().contains("entry 7"));
    }
}
