//! Subscription plans and their watch-hour thresholds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::EngagementError;

/// A subscription tier and the monthly watch hours below which a user is
/// considered to be under-utilising it.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub name: String,
    pub threshold: f64,
}

/// Known plans keyed by exact name, in declaration order.
///
/// Serializes as a JSON object of `name -> threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, f64>",
    into = "IndexMap<String, f64>"
)]
pub struct PlanTable {
    plans: IndexMap<String, Plan>,
}

impl PlanTable {
    /// Create an empty plan table.
    pub fn empty() -> Self {
        Self {
            plans: IndexMap::new(),
        }
    }

    /// Add or replace a plan.
    ///
    /// Thresholds must be finite and non-negative.
    pub fn with_plan(
        mut self,
        name: impl Into<String>,
        threshold: f64,
    ) -> Result<Self, EngagementError> {
        let name = name.into();
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(EngagementError::Config(format!(
                "plan '{}' has invalid threshold {}",
                name, threshold
            )));
        }
        self.plans.insert(name.clone(), Plan { name, threshold });
        Ok(self)
    }

    /// Look up a plan by exact name.
    pub fn get(&self, name: &str) -> Option<&Plan> {
        self.plans.get(name)
    }

    /// Iterate plans in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Plan> {
        self.plans.values()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl Default for PlanTable {
    fn default() -> Self {
        let plans = [("Premium", 100.0), ("Standard", 50.0), ("Basic", 25.0)]
            .into_iter()
            .map(|(name, threshold)| {
                (
                    name.to_string(),
                    Plan {
                        name: name.to_string(),
                        threshold,
                    },
                )
            })
            .collect();
        Self { plans }
    }
}

impl TryFrom<IndexMap<String, f64>> for PlanTable {
    type Error = EngagementError;

    fn try_from(map: IndexMap<String, f64>) -> Result<Self, Self::Error> {
        map.into_iter()
            .try_fold(PlanTable::empty(), |table, (name, threshold)| {
                table.with_plan(name, threshold)
            })
    }
}

impl From<PlanTable> for IndexMap<String, f64> {
    fn from(table: PlanTable) -> Self {
        table
            .plans
            .into_iter()
            .map(|(name, plan)| (name, plan.threshold))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plans() {
        let table = PlanTable::default();
        let names: Vec<&str> = table.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Premium", "Standard", "Basic"]);
        assert_eq!(table.get("Premium").map(|p| p.threshold), Some(100.0));
        assert_eq!(table.get("Standard").map(|p| p.threshold), Some(50.0));
        assert_eq!(table.get("Basic").map(|p| p.threshold), Some(25.0));
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = PlanTable::default();
        assert!(table.get("premium").is_none());
        assert!(table.get(" Premium").is_none());
        assert!(table.get("Gold").is_none());
    }

    #[test]
    fn test_rejects_bad_threshold() {
        assert!(PlanTable::empty().with_plan("Free", -1.0).is_err());
        assert!(PlanTable::empty().with_plan("Free", f64::NAN).is_err());
        assert!(PlanTable::empty().with_plan("Free", 0.0).is_ok());
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let json = r#"{"Gold": 200, "Basic": 25.5}"#;
        let table: PlanTable = serde_json::from_str(json).unwrap();

        let names: Vec<&str> = table.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Gold", "Basic"]);
        assert_eq!(table.get("Basic").map(|p| p.threshold), Some(25.5));

        let back = serde_json::to_string(&table).unwrap();
        assert_eq!(back, r#"{"Gold":200.0,"Basic":25.5}"#);
    }

    #[test]
    fn test_json_rejects_negative_threshold() {
        let result: Result<PlanTable, _> = serde_json::from_str(r#"{"Basic": -5}"#);
        assert!(result.is_err());
    }
}
