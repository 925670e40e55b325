//! Enrichment configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::PlanTable;

/// Reference "current date" used when none is configured.
pub const DEFAULT_REFERENCE_DATE: &str = "2025-03-25";

/// Inputs to classification that would otherwise be global constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    /// Date that days-inactive is measured from.
    pub reference_date: NaiveDate,
    /// Known plans and their thresholds.
    pub plans: PlanTable,
}

impl EnrichConfig {
    /// Set the reference date.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    /// Replace the plan table.
    pub fn with_plans(mut self, plans: PlanTable) -> Self {
        self.plans = plans;
        self
    }
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            reference_date: NaiveDate::parse_from_str(DEFAULT_REFERENCE_DATE, "%Y-%m-%d")
                .expect("default reference date is valid"),
            plans: PlanTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference_date() {
        let config = EnrichConfig::default();
        assert_eq!(
            config.reference_date,
            NaiveDate::from_ymd_opt(2025, 3, 25).unwrap()
        );
        assert_eq!(config.plans.len(), 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EnrichConfig =
            serde_json::from_str(r#"{"reference_date": "2024-12-31"}"#).unwrap();

        assert_eq!(
            config.reference_date,
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert_eq!(config.plans, PlanTable::default());
    }
}
