// crates/palcode-core/src/analyze/mod.rs

pub mod analyzer;
pub mod report;

pub use analyzer::{analyze, analyze_hex, analyze_standard};
