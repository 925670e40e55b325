//! CSV loader producing ordered raw records.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::{debug, info, warn};

use super::source::{LoadOutcome, RawRecord};
use crate::error::{EngagementError, Result};

/// Loader configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

/// Reads delimited files whose first row holds the column names.
pub struct Loader {
    config: ParserConfig,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Load a file into ordered records.
    ///
    /// A missing file yields [`LoadOutcome::NotFound`]. Any other IO or CSV
    /// failure is returned as an error.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadOutcome> {
        let path = path.as_ref();

        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "source file not found");
                return Ok(LoadOutcome::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(EngagementError::io(path, e)),
        };

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| EngagementError::io(path, e))?;

        let records = self.parse_bytes(&contents)?;
        info!(path = %path.display(), records = records.len(), "loaded source file");

        Ok(LoadOutcome::Loaded {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Parse bytes directly.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<RawRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() {
            debug!("source has no header row");
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;

            // Short rows are padded with empty values, long rows truncated
            let record: RawRecord = headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), row.get(i).unwrap_or("").to_string()))
                .collect();
            records.push(record);
        }

        Ok(records)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
