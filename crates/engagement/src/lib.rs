//! Engagement: validate and enrich subscription user exports.
//!
//! Reads a tabular export of subscription users, checks each row against a
//! fixed schema and the configured plan table, and classifies valid users by
//! how much of their plan they actually watch and how long ago they last
//! logged in.
//!
//! # Pipeline
//!
//! - **Load**: read the export into ordered [`RawRecord`]s
//! - **Enrich**: resolve each record against the schema and classify it
//! - **Export**: write [`EnrichedRecord`]s back out as CSV
//!
//! # Example
//!
//! ```no_run
//! use engagement::{Pipeline, PipelineConfig};
//!
//! let pipeline = Pipeline::with_config(
//!     PipelineConfig::default()
//!         .with_input("netflix_users.csv")
//!         .with_output("enriched_netflix_data.csv"),
//! );
//! let report = pipeline.run().unwrap();
//!
//! println!("Enriched: {}", report.enrichment.enriched.len());
//! println!("Invalid: {}", report.enrichment.invalid.len());
//! ```

pub mod enrichment;
pub mod error;
pub mod export;
pub mod input;
pub mod schema;

mod pipeline;

pub use crate::pipeline::{
    Pipeline, PipelineConfig, PipelineReport, DEFAULT_INPUT, DEFAULT_OUTPUT,
};
pub use enrichment::{
    EngagementStatus, EnrichConfig, EnrichedRecord, Enricher, EnrichmentResult, InvalidEntries,
    InvalidReason, RecordOutcome, DEFAULT_REFERENCE_DATE,
};
pub use error::{EngagementError, Result};
pub use export::{ExportOutcome, Exporter};
pub use input::{LoadOutcome, Loader, ParserConfig, RawRecord};
pub use schema::{Plan, PlanTable, SubscriptionRecord, REQUIRED_FIELDS};
