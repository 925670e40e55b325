//! JSON report of rejected records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::writer::{ExportOutcome, Exporter};
use crate::enrichment::InvalidEntries;
use crate::error::{EngagementError, Result};

impl Exporter {
    /// Write the invalid entries as a JSON object of `user_id -> reason`.
    ///
    /// The report is written even when there are no invalid entries. Failures
    /// are captured in the outcome like [`Exporter::export`].
    pub fn write_invalid_report(
        &self,
        invalid: &InvalidEntries,
        path: impl AsRef<Path>,
    ) -> ExportOutcome {
        let path = path.as_ref();
        let result = write_json(invalid, path).map(|_| invalid.len());
        ExportOutcome::from_result(path, result)
    }
}

fn write_json(invalid: &InvalidEntries, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| EngagementError::io(path, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, invalid)?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| EngagementError::io(path, e))?;

    Ok(())
}
