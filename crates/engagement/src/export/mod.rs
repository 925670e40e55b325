//! Writing enriched records and rejection reports.

mod report;
mod writer;

pub use writer::{ExportOutcome, Exporter};
