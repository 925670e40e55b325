//! Pipeline configuration and the load -> enrich -> export run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::enrichment::{EnrichConfig, Enricher, EnrichmentResult};
use crate::error::{EngagementError, Result};
use crate::export::{ExportOutcome, Exporter};
use crate::input::{LoadOutcome, Loader, ParserConfig};

/// Source file read when no input is configured.
pub const DEFAULT_INPUT: &str = "netflix_users.csv";
/// Destination file written when no output is configured.
pub const DEFAULT_OUTPUT: &str = "enriched_netflix_data.csv";

/// Configuration for a pipeline run.
///
/// Every field is optional in the JSON form; enrichment settings sit at the
/// top level:
///
/// ```json
/// {
///   "input": "users.csv",
///   "reference_date": "2025-03-25",
///   "plans": { "Premium": 100, "Standard": 50, "Basic": 25 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// File to load.
    pub input: PathBuf,
    /// File to write enriched records to.
    pub output: PathBuf,
    /// Optional JSON file for the invalid entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_report: Option<PathBuf>,
    /// Input field delimiter.
    pub delimiter: char,
    /// Enrichment settings.
    #[serde(flatten)]
    pub enrich: EnrichConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            invalid_report: None,
            delimiter: ',',
            enrich: EnrichConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| EngagementError::io(path, e))?;

        serde_json::from_str(&contents).map_err(|e| {
            EngagementError::Config(format!("Failed to parse '{}': {}", path.display(), e))
        })
    }

    /// Set the input file.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    /// Set the output file.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Also write invalid entries to a JSON report.
    pub fn with_invalid_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.invalid_report = Some(path.into());
        self
    }

    /// Set the input delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the enrichment settings.
    pub fn with_enrich(mut self, enrich: EnrichConfig) -> Self {
        self.enrich = enrich;
        self
    }

    /// Loader settings derived from this configuration.
    pub fn parser_config(&self) -> Result<ParserConfig> {
        if !self.delimiter.is_ascii() || self.delimiter == '"' {
            return Err(EngagementError::Config(format!(
                "Delimiter must be a single ASCII character other than '\"', got {:?}",
                self.delimiter
            )));
        }

        Ok(ParserConfig {
            delimiter: self.delimiter as u8,
            ..ParserConfig::default()
        })
    }
}

/// What happened at each stage of a run.
#[derive(Debug)]
pub struct PipelineReport {
    pub load: LoadOutcome,
    pub enrichment: EnrichmentResult,
    pub export: ExportOutcome,
    /// Present when an invalid-entry report was configured.
    pub invalid_report: Option<ExportOutcome>,
}

/// Runs load, enrichment and export once, in sequence.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline.
    ///
    /// A missing input file and failed writes are reported in the returned
    /// [`PipelineReport`]. Only invalid configuration and unreadable or
    /// malformed input produce an error.
    pub fn run(&self) -> Result<PipelineReport> {
        let loader = Loader::with_config(self.config.parser_config()?);
        let enricher = Enricher::with_config(self.config.enrich.clone());
        let exporter = Exporter::new();

        let load = loader.load(&self.config.input)?;
        let enrichment = enricher.enrich(load.records());
        let export = exporter.export(&enrichment.enriched, &self.config.output);
        let invalid_report = self
            .config
            .invalid_report
            .as_ref()
            .map(|path| exporter.write_invalid_report(&enrichment.invalid, path));

        info!(
            loaded = load.record_count(),
            enriched = enrichment.enriched.len(),
            rejected = enrichment.rejected,
            written = export.written_count(),
            "pipeline finished"
        );

        Ok(PipelineReport {
            load,
            enrichment,
            export,
            invalid_report,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
