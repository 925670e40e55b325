//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{Loader, ParserConfig};
pub use source::{LoadOutcome, RawRecord};
