// crates/palcode-core/src/encode.rs
//
// Index -> RGB. Pure integer arithmetic over the formula tables.

use crate::color::rgb::Rgb;
use crate::error::{PaletteError, Result};
use crate::formula::formula::Formula;
use crate::index::{ColorIndex, BAND_COUNT};

/// Anything that can produce a color for each palette index.
pub trait PaletteEncoder {
    fn encode(&self, index: ColorIndex) -> Rgb;
}

impl PaletteEncoder for Formula {
    fn encode(&self, index: ColorIndex) -> Rgb {
        let band = index.band();
        if index.is_gray() {
            return Rgb::gray(gray_for_band(band));
        }

        let code = self.hue_code_unchecked(index.slot());
        Rgb::new(
            self.channel_value_unchecked(band, code.red),
            self.channel_value_unchecked(band, code.green),
            self.channel_value_unchecked(band, code.blue),
        )
    }
}

/// Grayscale level `round(255 * (7 - band) / 7)`.
///
/// `255 * k / 7` is never a half-integer for k in 1..=7, so the rounding
/// mode does not matter; this rounds half up in integer arithmetic.
#[inline]
fn gray_for_band(band: usize) -> u8 {
    let steps = (BAND_COUNT - band) as u32;
    let denom = BAND_COUNT as u32;
    ((2 * 255 * steps + denom) / (2 * denom)) as u8
}

pub fn gray_level(band: usize) -> Result<u8> {
    if band >= BAND_COUNT {
        return Err(PaletteError::DomainViolation(format!(
            "band {} out of range (expected 0..{})",
            band, BAND_COUNT
        )));
    }
    Ok(gray_for_band(band))
}

/// Encode with the standard formula.
#[inline]
pub fn encode(index: ColorIndex) -> Rgb {
    Formula::STANDARD.encode(index)
}

/// Encode a raw index with the standard formula, rejecting indices past 132.
pub fn encode_index(index: usize) -> Result<Rgb> {
    Ok(encode(ColorIndex::new(index)?))
}

/// The full 133-entry palette produced by `encoder`, in index order.
pub fn encode_all<E: PaletteEncoder + ?Sized>(encoder: &E) -> Vec<Rgb> {
    ColorIndex::all().map(|i| encoder.encode(i)).collect()
}
