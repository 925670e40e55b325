//! Validation and enrichment of subscription records.
//!
//! Each raw record is resolved into a [`SubscriptionRecord`](crate::schema::SubscriptionRecord),
//! checked against the required fields and the plan table, and either
//! classified into an [`EnrichedRecord`] or diverted into [`InvalidEntries`].

mod config;
mod enricher;
mod invalid;
mod status;

pub use config::{EnrichConfig, DEFAULT_REFERENCE_DATE};
pub use enricher::{Enricher, EnrichmentResult, RecordOutcome};
pub use invalid::{InvalidEntries, InvalidReason};
pub use status::{EngagementStatus, EnrichedRecord};
