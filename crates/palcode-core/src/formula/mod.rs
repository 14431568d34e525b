// crates/palcode-core/src/formula/mod.rs

pub mod defaults;
pub mod format;
pub mod formula;
