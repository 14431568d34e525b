// crates/palcode-cli/src/cmd/mod.rs

pub mod analyze;
pub mod encode;
pub mod formula;
pub mod series;
pub mod tint;
