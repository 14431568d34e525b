// crates/palcode-core/src/validate.rs

use crate::error::{PaletteError, Result};
use crate::formula::formula::Formula;
use crate::index::{BAND_COUNT, HUE_COUNT};

/// Largest allowed `top`: `top - 1` must fit in a channel.
const TOP_LIMIT: u16 = 256;

pub fn validate_tables(
    base: &[u16; BAND_COUNT],
    top: &[u16; BAND_COUNT],
    hue_codes: &[u8; HUE_COUNT],
) -> Result<()> {
    for band in 0..BAND_COUNT {
        // top - 1 is the brightest level; it must be a channel value.
        if top[band] == 0 || top[band] > TOP_LIMIT {
            return Err(PaletteError::DegenerateTable(format!(
                "top[{}]={} must be in 1..={}",
                band, top[band], TOP_LIMIT
            )));
        }
        // An inverted interval would make delta negative.
        if base[band] > top[band] {
            return Err(PaletteError::DegenerateTable(format!(
                "base[{}]={} exceeds top[{}]={}",
                band, base[band], band, top[band]
            )));
        }
    }

    for (i, &code) in hue_codes.iter().enumerate() {
        if code > 0b11_11_11 {
            return Err(PaletteError::DegenerateTable(format!(
                "hue code for slot {} is 0b{:b}, wider than 6 bits",
                i + 1,
                code
            )));
        }
    }

    Ok(())
}

/// Re-check a formula that was built without going through `Formula::new`
/// (the `STANDARD` constant).
pub fn validate_formula(f: &Formula) -> Result<()> {
    validate_tables(f.base(), f.top(), f.hue_codes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::defaults::{BASE, HUE_CODES, TOP};

    #[test]
    fn standard_tables_are_valid() {
        validate_formula(&Formula::STANDARD).unwrap();
    }

    #[test]
    fn rejects_zero_and_oversized_top() {
        let mut top = TOP;
        top[5] = 0;
        let mut base = BASE;
        base[5] = 0;
        assert!(validate_tables(&base, &top, &HUE_CODES).is_err());

        let mut top = TOP;
        top[0] = 257;
        let err = validate_tables(&BASE, &top, &HUE_CODES).unwrap_err();
        assert!(err.to_string().contains("top[0]=257"));
    }

    #[test]
    fn rejects_wide_hue_code() {
        let mut codes = HUE_CODES;
        codes[3] = 0b100_0000;
        let err = validate_tables(&BASE, &TOP, &codes).unwrap_err();
        assert!(matches!(err, PaletteError::DegenerateTable(_)));
        assert!(err.to_string().contains("slot 4"));
    }
}
