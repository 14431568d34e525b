// crates/palcode-cli/src/io/mod.rs

pub mod formula_file;
pub mod reference_file;
pub mod series;
