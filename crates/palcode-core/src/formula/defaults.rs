// crates/palcode-core/src/formula/defaults.rs
//
// The standard formula tables. These reproduce the reference palette
// (see crate::reference) to within a few units per channel.

use crate::index::{BAND_COUNT, HUE_COUNT};

/// Lower interval bound per band, before the -1 adjustment.
pub const BASE: [u16; BAND_COUNT] = [192, 144, 96, 64, 0, 0, 0];

/// Upper interval bound per band, before the -1 adjustment.
pub const TOP: [u16; BAND_COUNT] = [256, 192, 192, 192, 256, 192, 128];

/// Packed `rrggbb` selector codes for hue slots 1..=18 (slot 0 is gray).
pub const HUE_CODES: [u8; HUE_COUNT] = [
    0b11_01_00, // 1  red-orange
    0b11_10_00, // 2  orange
    0b11_11_00, // 3  yellow
    0b10_11_00, // 4
    0b01_11_00, // 5
    0b00_11_00, // 6  green
    0b00_11_01, // 7
    0b00_11_10, // 8
    0b00_11_11, // 9  cyan
    0b00_10_11, // 10
    0b00_01_11, // 11
    0b00_00_11, // 12 blue
    0b01_00_11, // 13
    0b10_00_11, // 14
    0b11_00_11, // 15 magenta
    0b11_00_10, // 16
    0b11_00_01, // 17
    0b11_00_00, // 18 red
];
