// crates/palcode-core/src/reference.rs
//
// The authoritative 133-entry palette the formula is measured against.

use crate::color::rgb::Rgb;
use crate::error::{PaletteError, Result};
use crate::index::{ColorIndex, COLOR_COUNT};

/// Reference palette as 24-bit `0xRRGGBB`, 7 bands of 19 (gray first).
pub const REFERENCE_HEX: [u32; COLOR_COUNT] = [
    // band 0
    0xFFFFFF, 0xFFD4BF, 0xFFE9BF, 0xFFFFBF, 0xE9FFBF, 0xD4FFBF,
    0xBFFFBF, 0xBFFFD4, 0xBFFFE9, 0xBFFFFF, 0xBFE9FF, 0xBFD4FF,
    0xBFBFFF, 0xD4BFFF, 0xE9BFFF, 0xFFBFFF, 0xFFBFE9, 0xFFBFD4,
    0xFFBFBF,
    // band 1
    0xDADADA, 0xBF9F8F, 0xBFAF8F, 0xBFBF8F, 0xAFBF8F, 0x9FBF8F,
    0x8FBF8F, 0x8FBF9F, 0x8FBFAF, 0x8FBFBF, 0x8FAFBF, 0x8F9FBF,
    0x8F8FBF, 0x9F8FBF, 0xAF8FBF, 0xBF8FBF, 0xBF8FAF, 0xBF8F9F,
    0xBF8F8F,
    // band 2 (slot 2 repeats band 1 slot 2)
    0xB6B6B6, 0xBF7F5F, 0xBFAF8F, 0xBFBF5F, 0x9FBF5F, 0x7FBF5F,
    0x5FBF5F, 0x5FBF7F, 0x5FBF9F, 0x5FBFBF, 0x5F9FBF, 0x5F7FBF,
    0x5F5FBF, 0x7F5FBF, 0x9F5FBF, 0xBF5FBF, 0xBF5F9F, 0xBF5F7F,
    0xBF5F5F,
    // band 3
    0x919191, 0xBF6A3F, 0xBF943F, 0xBFBF3F, 0x94BF3F, 0x6ABF3F,
    0x3FBF3F, 0x3FBF6A, 0x3FBF94, 0x3FBFBF, 0x3F94BF, 0x3F6ABF,
    0x3F3FBF, 0x6A3FBF, 0x943FBF, 0xBF3FBF, 0xBF3F94, 0xBF3F6A,
    0xBF3F3F,
    // band 4
    0x6D6D6D, 0xFF5500, 0xFFAA00, 0xFFFF00, 0xAAFF00, 0x54FF00,
    0x00FF00, 0x00FF54, 0x00FFAA, 0x00FFFF, 0x00A9FF, 0x0055FF,
    0x0000FF, 0x5500FF, 0xA900FF, 0xFE00FF, 0xFF00AA, 0xFF0055,
    0xFF0000,
    // band 5
    0x484848, 0xBF3F00, 0xBF7F00, 0xBFBF00, 0x7FBF00, 0x3FBF00,
    0x00BF00, 0x00BF3F, 0x00BF7F, 0x00BFBF, 0x007FBF, 0x003FBF,
    0x0000BF, 0x3F00BF, 0x7F00BF, 0xBF00BF, 0xBF007F, 0xBF003F,
    0xBF0000,
    // band 6
    0x242424, 0x7F2A00, 0x7F5500, 0x7F7F00, 0x557F00, 0x2A7F00,
    0x007F00, 0x007F2A, 0x007F55, 0x007F7F, 0x00547F, 0x002A7F,
    0x00007F, 0x2A007F, 0x54007F, 0x7F007F, 0x7F0055, 0x7F002A,
    0x7F0000,
];

#[inline]
const fn unpack24(v: u32) -> Rgb {
    Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Reference color for one index.
#[inline]
pub fn reference_color(index: ColorIndex) -> Rgb {
    unpack24(REFERENCE_HEX[index.get()])
}

/// The whole reference palette in index order.
pub fn reference_table() -> Vec<Rgb> {
    REFERENCE_HEX.iter().map(|&v| unpack24(v)).collect()
}

fn is_comment(line: &str) -> bool {
    line.is_empty() || line == "#" || line.starts_with("# ") || line.starts_with("//")
}

/// Parse a reference palette from text, one color per line.
///
/// Each line is anything `Rgb::parse` accepts. Blank lines and lines starting
/// with `# ` or `//` are skipped. The entry count is not checked here; the
/// analyzer rejects tables that are not exactly 133 long.
pub fn parse_reference(text: &str) -> Result<Vec<Rgb>> {
    let mut out = Vec::with_capacity(COLOR_COUNT);
    for (n, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if is_comment(line) {
            continue;
        }
        let c = Rgb::parse(line).map_err(|e| match e {
            PaletteError::InputShape(m) => PaletteError::InputShape(format!("line {}: {}", n + 1, m)),
            PaletteError::ParseColor(m) => PaletteError::ParseColor(format!("line {}: {}", n + 1, m)),
            other => other,
        })?;
        out.push(c);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_layout() {
        let t = reference_table();
        assert_eq!(t.len(), COLOR_COUNT);
        assert_eq!(t[1], Rgb::new(255, 212, 191));
        for band in 0..7 {
            assert!(t[band * 19].is_achromatic(), "band {band} gray entry");
        }
        assert_eq!(t[114], Rgb::gray(0x24));
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let text = "# reference\n\n#FFFFFF\n// note\n0xFFD4BF\n255,233,191\n";
        let v = parse_reference(text).unwrap();
        assert_eq!(v, vec![Rgb::gray(255), Rgb::new(255, 212, 191), Rgb::new(255, 233, 191)]);
    }

    #[test]
    fn parse_reports_line_number() {
        let err = parse_reference("#FFFFFF\n#12345\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");

        let err = parse_reference("1,2,3\n\n300,0,0\n").unwrap_err();
        assert!(matches!(err, PaletteError::InputShape(_)));
        assert!(err.to_string().contains("line 3"), "{err}");
    }
}
