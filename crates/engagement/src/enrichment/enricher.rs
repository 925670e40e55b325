//! Per-record validation and classification.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::config::EnrichConfig;
use super::invalid::{InvalidEntries, InvalidReason};
use super::status::{EngagementStatus, EnrichedRecord};
use crate::input::RawRecord;
use crate::schema::SubscriptionRecord;

/// Date format of the `Last_Login` column.
const LOGIN_DATE_FORMAT: &str = "%Y-%m-%d";

/// What became of a single raw record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Enriched(EnrichedRecord),
    Invalid {
        user_id: String,
        reason: InvalidReason,
    },
}

/// Output of enriching a batch of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentResult {
    /// Classified records, in input order.
    pub enriched: Vec<EnrichedRecord>,
    /// Rejection reasons keyed by user identifier.
    pub invalid: InvalidEntries,
    /// Number of input records that were rejected. Can exceed
    /// `invalid.len()` when rejected records share an identifier.
    pub rejected: usize,
}

impl EnrichmentResult {
    /// Total records that went through enrichment.
    pub fn processed(&self) -> usize {
        self.enriched.len() + self.rejected
    }

    /// Human-readable summary of the invalid entries.
    pub fn summary(&self) -> String {
        self.invalid.summary()
    }
}

/// Validates raw records and classifies the valid ones.
pub struct Enricher {
    config: EnrichConfig,
}

impl Enricher {
    /// Create an enricher with the default plans and reference date.
    pub fn new() -> Self {
        Self::with_config(EnrichConfig::default())
    }

    /// Create an enricher with custom configuration.
    pub fn with_config(config: EnrichConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Enrich a batch of records.
    ///
    /// Every input record is either enriched or rejected. The invalid-entry
    /// summary is emitted as a log event once the batch is done.
    pub fn enrich(&self, records: &[RawRecord]) -> EnrichmentResult {
        let mut result = EnrichmentResult::default();
        if records.is_empty() {
            return result;
        }

        for raw in records {
            match self.classify(raw) {
                RecordOutcome::Enriched(record) => result.enriched.push(record),
                RecordOutcome::Invalid { user_id, reason } => {
                    debug!(user_id = %user_id, reason = %reason, "record rejected");
                    result.invalid.insert(user_id, reason);
                    result.rejected += 1;
                }
            }
        }

        info!(
            enriched = result.enriched.len(),
            rejected = result.rejected,
            "{}",
            result.summary()
        );

        result
    }

    /// Validate and classify a single record.
    ///
    /// Checks run in order and stop at the first failure: required fields,
    /// then plan membership, then watch time and login date parsing.
    pub fn classify(&self, raw: &RawRecord) -> RecordOutcome {
        let record = SubscriptionRecord::from_raw(raw);
        let user_id = record.user_key();

        let (Some(_), Some(plan_name), Some(watch_time), Some(last_login)) = (
            record.user_id,
            record.subscription_type,
            record.watch_time_hours,
            record.last_login,
        ) else {
            return invalid(user_id, InvalidReason::Missing(record.missing_fields()));
        };

        let Some(plan) = self.config.plans.get(plan_name) else {
            return invalid(user_id, InvalidReason::InvalidSubscriptionType);
        };

        let Some(watch_time) = parse_watch_time(watch_time) else {
            return invalid(user_id, InvalidReason::InvalidDataFormat);
        };
        let engagement_status = EngagementStatus::classify(watch_time, plan.threshold);

        let Some(login_date) = parse_login_date(last_login) else {
            return invalid(user_id, InvalidReason::InvalidDataFormat);
        };
        let days_inactive = (self.config.reference_date - login_date).num_days();

        RecordOutcome::Enriched(EnrichedRecord {
            user_id: user_id.to_string(),
            engagement_status,
            days_inactive,
        })
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse hours watched. Surrounding whitespace is ignored and single
/// underscores between digits are accepted as group separators (`1_000`).
fn parse_watch_time(value: &str) -> Option<f64> {
    let value = value.trim();
    if !value.contains('_') {
        return value.parse().ok();
    }

    let bytes = value.as_bytes();
    let grouped_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !grouped_ok {
        return None;
    }

    value.replace('_', "").parse().ok()
}

/// Parse a `YYYY-MM-DD` login date.
///
/// The year must be exactly four digits and month and day one or two digits,
/// with no sign or surrounding whitespace, so `20-03-25` is rejected rather
/// than read as year 20.
fn parse_login_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !(digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)) {
        return None;
    }

    NaiveDate::parse_from_str(value, LOGIN_DATE_FORMAT).ok()
}

fn invalid(user_id: &str, reason: InvalidReason) -> RecordOutcome {
    RecordOutcome::Invalid {
        user_id: user_id.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PlanTable;

    fn raw(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn user(id: &str, plan: &str, hours: &str, login: &str) -> RawRecord {
        raw(&[
            ("User_ID", id),
            ("Subscription_Type", plan),
            ("Watch_Time_Hours", hours),
            ("Last_Login", login),
        ])
    }

    fn enriched(outcome: RecordOutcome) -> EnrichedRecord {
        match outcome {
            RecordOutcome::Enriched(record) => record,
            other => panic!("expected enriched record, got {:?}", other),
        }
    }

    fn reason(outcome: RecordOutcome) -> (String, String) {
        match outcome {
            RecordOutcome::Invalid { user_id, reason } => (user_id, reason.to_string()),
            other => panic!("expected invalid record, got {:?}", other),
        }
    }

    #[test]
    fn test_premium_active() {
        let enricher = Enricher::new();
        let record = enriched(enricher.classify(&user("U1", "Premium", "150", "2025-01-01")));

        assert_eq!(record.user_id, "U1");
        assert_eq!(record.engagement_status, EngagementStatus::Active);
        assert_eq!(record.days_inactive, 83);
    }

    #[test]
    fn test_basic_under_utilising() {
        let enricher = Enricher::new();
        let record = enriched(enricher.classify(&user("U2", "Basic", "10", "2025-03-20")));

        assert_eq!(record.engagement_status, EngagementStatus::UnderUtilising);
        assert_eq!(record.days_inactive, 5);
    }

    #[test]
    fn test_standard_at_threshold_is_active() {
        let enricher = Enricher::new();
        let record = enriched(enricher.classify(&user("U3", "Standard", "50.0", "2025-03-25")));

        assert_eq!(record.engagement_status, EngagementStatus::Active);
        assert_eq!(record.days_inactive, 0);
    }

    #[test]
    fn test_login_after_reference_is_negative() {
        let enricher = Enricher::new();
        let record = enriched(enricher.classify(&user("U4", "Basic", "30", "2025-04-01")));
        assert_eq!(record.days_inactive, -7);
    }

    #[test]
    fn test_missing_last_login() {
        let enricher = Enricher::new();
        let record = raw(&[
            ("User_ID", "U5"),
            ("Subscription_Type", "Basic"),
            ("Watch_Time_Hours", "10"),
        ]);

        assert_eq!(
            reason(enricher.classify(&record)),
            ("U5".to_string(), "Missing: Last_Login".to_string())
        );
    }

    #[test]
    fn test_missing_several_fields_in_declared_order() {
        let enricher = Enricher::new();
        let record = raw(&[("Last_Login", "2025-01-01"), ("Subscription_Type", "")]);

        assert_eq!(
            reason(enricher.classify(&record)),
            (
                "UnknownID".to_string(),
                "Missing: User_ID, Subscription_Type, Watch_Time_Hours".to_string()
            )
        );
    }

    #[test]
    fn test_missing_check_runs_before_plan_check() {
        let enricher = Enricher::new();
        let record = raw(&[
            ("User_ID", "U6"),
            ("Subscription_Type", "Gold"),
            ("Watch_Time_Hours", "abc"),
        ]);

        assert_eq!(reason(enricher.classify(&record)).1, "Missing: Last_Login");
    }

    #[test]
    fn test_unknown_plan() {
        let enricher = Enricher::new();
        assert_eq!(
            reason(enricher.classify(&user("U7", "Gold", "10", "2025-03-20"))).1,
            "Invalid Subscription type"
        );
        assert_eq!(
            reason(enricher.classify(&user("U7", "premium", "10", "2025-03-20"))).1,
            "Invalid Subscription type"
        );
    }

    #[test]
    fn test_bad_watch_time() {
        let enricher = Enricher::new();
        assert_eq!(
            reason(enricher.classify(&user("U8", "Premium", "abc", "2025-03-20"))).1,
            "Invalid data format"
        );
    }

    #[test]
    fn test_bad_login_date() {
        let enricher = Enricher::new();
        for login in [
            "25/03/2025",
            "2025-02-30",
            "2025-03-20T10:00",
            "yesterday",
            "20-03-25",
            "25-03-20",
            " 2025-03-20",
            "2025-03-20 ",
            "+2025-03-20",
            "-2025-03-20",
            "02025-03-20",
            "2025-003-20",
        ] {
            assert_eq!(
                reason(enricher.classify(&user("U9", "Basic", "30", login))).1,
                "Invalid data format",
                "login {:?}",
                login
            );
        }
    }

    #[test]
    fn test_login_date_without_zero_padding() {
        let enricher = Enricher::new();
        let record = enriched(enricher.classify(&user("U13", "Basic", "30", "2025-3-5")));
        assert_eq!(record.days_inactive, 20);
    }

    #[test]
    fn test_watch_time_digit_groups() {
        assert_eq!(parse_watch_time("1_000"), Some(1000.0));
        assert_eq!(parse_watch_time("1_000.5"), Some(1000.5));
        assert_eq!(parse_watch_time("_100"), None);
        assert_eq!(parse_watch_time("100_"), None);
        assert_eq!(parse_watch_time("1__000"), None);
        assert_eq!(parse_watch_time("1_.5"), None);

        let enricher = Enricher::new();
        let record = enriched(enricher.classify(&user("U14", "Premium", "1_000", "2025-03-20")));
        assert_eq!(record.engagement_status, EngagementStatus::Active);
    }

    #[test]
    fn test_watch_time_allows_surrounding_whitespace() {
        let enricher = Enricher::new();
        let record = enriched(enricher.classify(&user("U10", "Basic", " 24.5 ", "2025-03-24")));
        assert_eq!(record.engagement_status, EngagementStatus::UnderUtilising);
    }

    #[test]
    fn test_custom_config() {
        let config = EnrichConfig::default()
            .with_reference_date(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap())
            .with_plans(PlanTable::empty().with_plan("Gold", 200.0).unwrap());
        let enricher = Enricher::with_config(config);

        let record = enriched(enricher.classify(&user("U11", "Gold", "150", "2025-01-01")));
        assert_eq!(record.engagement_status, EngagementStatus::UnderUtilising);
        assert_eq!(record.days_inactive, 10);

        assert_eq!(
            reason(enricher.classify(&user("U12", "Premium", "150", "2025-01-01"))).1,
            "Invalid Subscription type"
        );
    }

    #[test]
    fn test_enrich_empty_batch() {
        let result = Enricher::new().enrich(&[]);
        assert!(result.enriched.is_empty());
        assert!(result.invalid.is_empty());
        assert_eq!(result.processed(), 0);
    }

    #[test]
    fn test_enrich_batch_splits_records() {
        let records = vec![
            user("U1", "Premium", "150", "2025-01-01"),
            user("U2", "Gold", "10", "2025-03-20"),
            user("U3", "Basic", "10", "2025-03-20"),
            raw(&[("Subscription_Type", "Basic")]),
            raw(&[("Watch_Time_Hours", "3")]),
        ];
        let result = Enricher::new().enrich(&records);

        let ids: Vec<&str> = result.enriched.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["U1", "U3"]);
        assert_eq!(result.rejected, 3);
        // Both records without an identifier collapse onto UnknownID
        assert_eq!(result.invalid.len(), 2);
        assert_eq!(
            result.invalid.get("UnknownID").map(|r| r.to_string()),
            Some("Missing: User_ID, Subscription_Type, Last_Login".to_string())
        );
        assert_eq!(result.processed(), records.len());
    }
}
