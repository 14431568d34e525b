// crates/palcode-core/src/color/rgb.rs

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{PaletteError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Unpack a 24-bit `0xRRGGBB` value.
    pub fn from_hex24(v: u32) -> Result<Self> {
        if v > 0x00FF_FFFF {
            return Err(PaletteError::InputShape(format!(
                "color 0x{:X} does not fit in 24 bits",
                v
            )));
        }
        Ok(Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8))
    }

    #[inline]
    pub fn to_hex24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Build from wide integers, rejecting any channel outside 0..=255.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let check = |ch: Channel, v: i64| -> Result<u8> {
            u8::try_from(v).map_err(|_| {
                PaletteError::InputShape(format!(
                    "{} channel {} outside 0..=255",
                    ch.name(),
                    v
                ))
            })
        };
        Ok(Self::new(
            check(Channel::Red, r)?,
            check(Channel::Green, g)?,
            check(Channel::Blue, b)?,
        ))
    }

    #[inline]
    pub fn channel(self, ch: Channel) -> u8 {
        match ch {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Parse `#RRGGBB`, `0xRRGGBB`, bare `RRGGBB`, or decimal `r,g,b`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.contains(',') {
            return parse_decimal_triple(s);
        }

        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if hex.len() != 6 {
            return Err(PaletteError::ParseColor(format!(
                "expected 6 hex digits, got {:?}",
                s
            )));
        }
        let v = u32::from_str_radix(hex, 16)
            .map_err(|e| PaletteError::ParseColor(format!("{:?}: {}", s, e)))?;
        Self::from_hex24(v)
    }
}

fn parse_decimal_triple(s: &str) -> Result<Rgb> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(PaletteError::ParseColor(format!(
            "expected r,g,b triple, got {:?}",
            s
        )));
    }
    let mut v = [0i64; 3];
    for (slot, p) in v.iter_mut().zip(parts.iter()) {
        *slot = p
            .parse::<i64>()
            .map_err(|e| PaletteError::ParseColor(format!("{:?}: {}", p, e)))?;
    }
    Rgb::from_channels(v[0], v[1], v[2])
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
