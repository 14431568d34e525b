// crates/palcode-core/src/color/tint.rs
//
// Multiplicative tinting of template pixels with a palette color.
// Integer only: out = floor(base * color / 255) per channel.

use crate::color::rgb::Rgb;

#[inline]
fn mul_255(base: u8, color: u8) -> u8 {
    ((base as u16 * color as u16) / 255) as u8
}

/// Scale `color` by the brightness of `base`, channel by channel.
///
/// A white base returns `color` unchanged; a black base returns black.
pub fn tint(base: Rgb, color: Rgb) -> Rgb {
    Rgb::new(
        mul_255(base.r, color.r),
        mul_255(base.g, color.g),
        mul_255(base.b, color.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_bases() {
        let c = Rgb::new(191, 63, 106);
        assert_eq!(tint(Rgb::gray(255), c), c);
        assert_eq!(tint(Rgb::gray(0), c), Rgb::gray(0));
    }

    #[test]
    fn mid_gray_halves_and_truncates() {
        // 128 * 255 / 255 = 128, 128 * 191 / 255 = 95.87 -> 95
        let out = tint(Rgb::gray(128), Rgb::new(255, 191, 1));
        assert_eq!(out, Rgb::new(128, 95, 0));
    }
}
