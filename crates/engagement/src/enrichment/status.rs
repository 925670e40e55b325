//! Engagement classification and the enriched output record.

use serde::{Deserialize, Serialize};

/// How well a user is using their plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngagementStatus {
    /// Watch time meets or exceeds the plan threshold.
    Active,
    /// Watch time is strictly below the plan threshold.
    #[serde(rename = "Under-utilising")]
    UnderUtilising,
}

impl EngagementStatus {
    /// Classify watch time against a plan threshold.
    pub fn classify(watch_time_hours: f64, threshold: f64) -> Self {
        if watch_time_hours < threshold {
            EngagementStatus::UnderUtilising
        } else {
            EngagementStatus::Active
        }
    }

    /// Label written to the output file.
    pub fn label(&self) -> &'static str {
        match self {
            EngagementStatus::Active => "Active",
            EngagementStatus::UnderUtilising => "Under-utilising",
        }
    }
}

impl std::fmt::Display for EngagementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated, classified user.
///
/// Field order here is the column order of the exported file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(rename = "User_ID")]
    pub user_id: String,
    #[serde(rename = "Engagement_Status")]
    pub engagement_status: EngagementStatus,
    /// Negative when the login is after the reference date.
    #[serde(rename = "Days_Inactive")]
    pub days_inactive: i64,
}
