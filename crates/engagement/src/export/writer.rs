//! CSV export of enriched records.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::enrichment::EnrichedRecord;
use crate::error::{EngagementError, Result};

/// Result of an export.
///
/// Write failures are captured here rather than returned as errors.
#[derive(Debug)]
pub enum ExportOutcome {
    /// There was nothing to write; the output file was not touched.
    NothingToExport,
    /// `count` records were written to `path`.
    Written { path: PathBuf, count: usize },
    /// Writing to `path` failed.
    Failed {
        path: PathBuf,
        error: EngagementError,
    },
}

impl ExportOutcome {
    /// Number of records written.
    pub fn written_count(&self) -> usize {
        match self {
            ExportOutcome::Written { count, .. } => *count,
            ExportOutcome::NothingToExport | ExportOutcome::Failed { .. } => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ExportOutcome::Failed { .. })
    }

    pub(super) fn from_result(path: &Path, result: Result<usize>) -> Self {
        match result {
            Ok(count) => {
                info!(path = %path.display(), count, "export written");
                ExportOutcome::Written {
                    path: path.to_path_buf(),
                    count,
                }
            }
            Err(error) => {
                warn!(path = %path.display(), error = %error, "export failed");
                ExportOutcome::Failed {
                    path: path.to_path_buf(),
                    error,
                }
            }
        }
    }
}

/// Writes enriched records as comma-delimited text.
pub struct Exporter;

impl Exporter {
    /// Create a new exporter.
    pub fn new() -> Self {
        Self
    }

    /// Export records to `path`.
    ///
    /// The header row comes from the first record's field names. An empty
    /// slice leaves `path` untouched.
    pub fn export(&self, records: &[EnrichedRecord], path: impl AsRef<Path>) -> ExportOutcome {
        let path = path.as_ref();

        if records.is_empty() {
            info!("no data to export");
            return ExportOutcome::NothingToExport;
        }

        ExportOutcome::from_result(path, self.write_records(records, path))
    }

    fn write_records(&self, records: &[EnrichedRecord], path: &Path) -> Result<usize> {
        let file = File::create(path).map_err(|e| EngagementError::io(path, e))?;

        let mut writer = csv::Writer::from_writer(BufWriter::new(file));
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(|e| EngagementError::io(path, e))?;

        Ok(records.len())
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}
