// crates/palcode-core/src/index.rs

use std::fmt;

use serde::Serialize;

use crate::error::{PaletteError, Result};

/// Number of value bands (rows) in the palette.
pub const BAND_COUNT: usize = 7;

/// Entries per band: one grayscale slot followed by 18 hue slots.
pub const SLOTS_PER_BAND: usize = 19;

/// Number of hue slots per band (slots 1..=18).
pub const HUE_COUNT: usize = SLOTS_PER_BAND - 1;

/// Total number of palette entries.
pub const COLOR_COUNT: usize = BAND_COUNT * SLOTS_PER_BAND;

/// A validated palette index in `0..133`.
///
/// The index decomposes into `band = index / 19` and `slot = index % 19`.
/// Slot 0 is the grayscale entry of its band, slots 1..=18 are hues.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorIndex(u8);

impl ColorIndex {
    pub fn new(index: usize) -> Result<Self> {
        if index >= COLOR_COUNT {
            return Err(PaletteError::DomainViolation(format!(
                "color index {} out of range (expected 0..{})",
                index, COLOR_COUNT
            )));
        }
        Ok(Self(index as u8))
    }

    /// Build an index from its band and slot.
    pub fn from_parts(band: usize, slot: usize) -> Result<Self> {
        if band >= BAND_COUNT {
            return Err(PaletteError::DomainViolation(format!(
                "band {} out of range (expected 0..{})",
                band, BAND_COUNT
            )));
        }
        if slot >= SLOTS_PER_BAND {
            return Err(PaletteError::DomainViolation(format!(
                "slot {} out of range (expected 0..{})",
                slot, SLOTS_PER_BAND
            )));
        }
        Self::new(band * SLOTS_PER_BAND + slot)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn band(self) -> usize {
        self.get() / SLOTS_PER_BAND
    }

    #[inline]
    pub fn slot(self) -> usize {
        self.get() % SLOTS_PER_BAND
    }

    #[inline]
    pub fn is_gray(self) -> bool {
        self.slot() == 0
    }

    /// Every index in ascending order.
    pub fn all() -> impl Iterator<Item = ColorIndex> {
        (0..COLOR_COUNT as u8).map(ColorIndex)
    }
}

impl TryFrom<usize> for ColorIndex {
    type Error = PaletteError;

    fn try_from(index: usize) -> Result<Self> {
        Self::new(index)
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_band_and_slot() {
        let idx = ColorIndex::new(40).unwrap();
        assert_eq!(idx.band(), 2);
        assert_eq!(idx.slot(), 2);
        assert!(!idx.is_gray());

        let gray = ColorIndex::new(114).unwrap();
        assert_eq!((gray.band(), gray.slot()), (6, 0));
        assert!(gray.is_gray());
    }

    #[test]
    fn from_parts_matches_new() {
        for idx in ColorIndex::all() {
            let again = ColorIndex::from_parts(idx.band(), idx.slot()).unwrap();
            assert_eq!(idx, again);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ColorIndex::new(COLOR_COUNT - 1).is_ok());
        assert!(matches!(
            ColorIndex::new(COLOR_COUNT),
            Err(PaletteError::DomainViolation(_))
        ));
        assert!(ColorIndex::from_parts(7, 0).is_err());
        assert!(ColorIndex::from_parts(0, 19).is_err());
    }

    #[test]
    fn all_covers_every_index_once() {
        let v: Vec<usize> = ColorIndex::all().map(ColorIndex::get).collect();
        assert_eq!(v.len(), COLOR_COUNT);
        assert_eq!(v.first(), Some(&0));
        assert_eq!(v.last(), Some(&132));
    }
}
