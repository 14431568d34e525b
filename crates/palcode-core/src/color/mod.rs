// crates/palcode-core/src/color/mod.rs

pub mod rgb;
pub mod tint;
