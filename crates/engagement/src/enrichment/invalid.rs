//! Invalid records and why they were rejected.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Why a record could not be enriched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// One or more required fields were absent or empty, in declared order.
    Missing(Vec<&'static str>),
    /// The subscription type is not a configured plan.
    InvalidSubscriptionType,
    /// Watch time or last login could not be parsed.
    InvalidDataFormat,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::Missing(fields) => write!(f, "Missing: {}", fields.join(", ")),
            InvalidReason::InvalidSubscriptionType => f.write_str("Invalid Subscription type"),
            InvalidReason::InvalidDataFormat => f.write_str("Invalid data format"),
        }
    }
}

impl Serialize for InvalidReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Rejected records keyed by user identifier.
///
/// Inserting a key that is already present replaces its reason and keeps its
/// original position, so several invalid rows sharing an identifier (including
/// the `UnknownID` fallback) collapse to the last reason recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InvalidEntries {
    entries: IndexMap<String, InvalidReason>,
}

impl InvalidEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejection, replacing any previous reason for this user.
    pub fn insert(&mut self, user_id: impl Into<String>, reason: InvalidReason) {
        self.entries.insert(user_id.into(), reason);
    }

    pub fn get(&self, user_id: &str) -> Option<&InvalidReason> {
        self.entries.get(user_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InvalidReason)> {
        self.entries.iter().map(|(id, reason)| (id.as_str(), reason))
    }

    /// One-line human-readable summary of the rejected users.
    pub fn summary(&self) -> String {
        let listed: Vec<String> = self
            .iter()
            .map(|(id, reason)| format!("{} ({})", id, reason))
            .collect();

        if listed.is_empty() {
            "0 User IDs with invalid data".to_string()
        } else {
            format!(
                "{} User IDs with invalid data: {}",
                self.len(),
                listed.join(", ")
            )
        }
    }
}
