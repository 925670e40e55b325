//! Loaded records and the outcome of a load.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// One row of the source file, keyed by column name in file column order.
pub type RawRecord = IndexMap<String, String>;

/// Result of loading a source file.
///
/// A missing file is not an error: it is reported through
/// [`LoadOutcome::NotFound`] and yields no records.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The file was read; records are in file order.
    Loaded {
        path: PathBuf,
        records: Vec<RawRecord>,
    },
    /// The file does not exist.
    NotFound { path: PathBuf },
}

impl LoadOutcome {
    /// The path that was loaded (or looked for).
    pub fn path(&self) -> &Path {
        match self {
            LoadOutcome::Loaded { path, .. } | LoadOutcome::NotFound { path } => path,
        }
    }

    /// Number of records loaded (zero when the file was missing).
    pub fn record_count(&self) -> usize {
        match self {
            LoadOutcome::Loaded { records, .. } => records.len(),
            LoadOutcome::NotFound { .. } => 0,
        }
    }

    /// Whether the source file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadOutcome::NotFound { .. })
    }

    /// Borrow the loaded records.
    pub fn records(&self) -> &[RawRecord] {
        match self {
            LoadOutcome::Loaded { records, .. } => records,
            LoadOutcome::NotFound { .. } => &[],
        }
    }

    /// Consume the outcome, yielding its records.
    pub fn into_records(self) -> Vec<RawRecord> {
        match self {
            LoadOutcome::Loaded { records, .. } => records,
            LoadOutcome::NotFound { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_has_no_records() {
        let outcome = LoadOutcome::NotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert!(outcome.is_not_found());
        assert_eq!(outcome.record_count(), 0);
        assert!(outcome.records().is_empty());
        assert_eq!(outcome.path(), Path::new("missing.csv"));
        assert!(outcome.into_records().is_empty());
    }

    #[test]
    fn test_loaded_keeps_records() {
        let mut record = RawRecord::new();
        record.insert("User_ID".to_string(), "U1".to_string());

        let outcome = LoadOutcome::Loaded {
            path: PathBuf::from("users.csv"),
            records: vec![record.clone()],
        };
        assert!(!outcome.is_not_found());
        assert_eq!(outcome.record_count(), 1);
        assert_eq!(outcome.into_records(), vec![record]);
    }
}
