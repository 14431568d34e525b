// crates/palcode-core/src/lib.rs

pub mod error;
pub mod validate;

pub mod analyze;
pub mod color;
pub mod encode;
pub mod formula;
pub mod index;
pub mod reference;

pub use crate::analyze::report::{BandSummary, ErrorEntry, ErrorReport, ErrorSummary};
pub use crate::color::rgb::{Channel, Rgb};
pub use crate::encode::PaletteEncoder;
pub use crate::error::{PaletteError, Result};
pub use crate::formula::formula::{Formula, HueCode, Selector};
pub use crate::index::ColorIndex;
