// crates/palcode-core/src/formula/formula.rs

use serde::{Deserialize, Serialize};

use crate::color::rgb::Channel;
use crate::error::{PaletteError, Result};
use crate::formula::defaults::{BASE, HUE_CODES, TOP};
use crate::index::{BAND_COUNT, HUE_COUNT, SLOTS_PER_BAND};
use crate::validate::validate_tables;

/// A 2-bit interpolation step (0..=3) between a band's base and top bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selector(u8);

impl Selector {
    pub const MAX: u8 = 3;

    pub fn new(v: u8) -> Result<Self> {
        if v > Self::MAX {
            return Err(PaletteError::DomainViolation(format!(
                "selector {} out of range (expected 0..={})",
                v,
                Self::MAX
            )));
        }
        Ok(Self(v))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

/// Three 2-bit selectors unpacked from a 6-bit hue code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HueCode {
    pub red: Selector,
    pub green: Selector,
    pub blue: Selector,
}

impl HueCode {
    /// Split a packed `rrggbb` code. Bits above the low six are ignored.
    #[inline]
    pub fn unpack(code: u8) -> Self {
        Self {
            red: Selector((code >> 4) & 0b11),
            green: Selector((code >> 2) & 0b11),
            blue: Selector(code & 0b11),
        }
    }

    #[inline]
    pub fn pack(self) -> u8 {
        (self.red.0 << 4) | (self.green.0 << 2) | self.blue.0
    }

    #[inline]
    pub fn selector(self, ch: Channel) -> Selector {
        match ch {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

/// The parametric palette formula: per-band intervals plus per-slot hue codes.
///
/// Construction always validates the tables, so every `Formula` in hand
/// yields channel values in 0..=255 without clamping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFormula")]
pub struct Formula {
    base: [u16; BAND_COUNT],
    top: [u16; BAND_COUNT],
    hue_codes: [u8; HUE_COUNT],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFormula {
    base: [u16; BAND_COUNT],
    top: [u16; BAND_COUNT],
    hue_codes: [u8; HUE_COUNT],
}

impl TryFrom<RawFormula> for Formula {
    type Error = PaletteError;

    fn try_from(raw: RawFormula) -> Result<Self> {
        Formula::new(raw.base, raw.top, raw.hue_codes)
    }
}

impl Default for Formula {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Formula {
    /// The built-in tables. Checked by `validate_tables` in tests and at CLI startup.
    pub const STANDARD: Formula = Formula {
        base: BASE,
        top: TOP,
        hue_codes: HUE_CODES,
    };

    pub fn new(
        base: [u16; BAND_COUNT],
        top: [u16; BAND_COUNT],
        hue_codes: [u8; HUE_COUNT],
    ) -> Result<Self> {
        validate_tables(&base, &top, &hue_codes)?;
        Ok(Self {
            base,
            top,
            hue_codes,
        })
    }

    pub fn base(&self) -> &[u16; BAND_COUNT] {
        &self.base
    }

    pub fn top(&self) -> &[u16; BAND_COUNT] {
        &self.top
    }

    pub fn hue_codes(&self) -> &[u8; HUE_COUNT] {
        &self.hue_codes
    }

    pub fn is_standard(&self) -> bool {
        *self == Self::STANDARD
    }

    /// Hue code for slot 1..=18.
    pub fn hue_code(&self, slot: usize) -> Result<HueCode> {
        if slot == 0 || slot >= SLOTS_PER_BAND {
            return Err(PaletteError::DomainViolation(format!(
                "hue slot {} out of range (expected 1..{})",
                slot, SLOTS_PER_BAND
            )));
        }
        Ok(self.hue_code_unchecked(slot))
    }

    #[inline]
    pub(crate) fn hue_code_unchecked(&self, slot: usize) -> HueCode {
        HueCode::unpack(self.hue_codes[slot - 1])
    }

    /// Adjusted `(base_val, top_val)` interval for a band.
    pub fn interval(&self, band: usize) -> Result<(u16, u16)> {
        check_band(band)?;
        Ok(self.interval_unchecked(band))
    }

    #[inline]
    fn interval_unchecked(&self, band: usize) -> (u16, u16) {
        // validate_tables guarantees 1 <= top <= 256 and base <= top.
        let base_val = self.base[band].saturating_sub(1);
        let top_val = self.top[band] - 1;
        (base_val, top_val)
    }

    /// Channel level for `selector` within `band`:
    /// `base_val + floor((top_val - base_val) * selector / 3)`.
    pub fn channel_value(&self, band: usize, selector: Selector) -> Result<u8> {
        check_band(band)?;
        Ok(self.channel_value_unchecked(band, selector))
    }

    #[inline]
    pub(crate) fn channel_value_unchecked(&self, band: usize, selector: Selector) -> u8 {
        let (base_val, top_val) = self.interval_unchecked(band);
        let delta = top_val - base_val;
        let v = base_val + delta * selector.0 as u16 / Selector::MAX as u16;
        debug_assert!(v <= u8::MAX as u16);
        v as u8
    }
}

fn check_band(band: usize) -> Result<()> {
    if band >= BAND_COUNT {
        return Err(PaletteError::DomainViolation(format!(
            "band {} out of range (expected 0..{})",
            band, BAND_COUNT
        )));
    }
    Ok(())
}
