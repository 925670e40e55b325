//! Fixed-shape view of a raw subscription row.

use crate::input::RawRecord;

/// Column holding the user identifier.
pub const USER_ID: &str = "User_ID";
/// Column holding the subscription plan name.
pub const SUBSCRIPTION_TYPE: &str = "Subscription_Type";
/// Column holding hours watched in the last month.
pub const WATCH_TIME_HOURS: &str = "Watch_Time_Hours";
/// Column holding the last login date (`YYYY-MM-DD`).
pub const LAST_LOGIN: &str = "Last_Login";

/// Columns every record must carry, in declared order.
pub const REQUIRED_FIELDS: [&str; 4] = [USER_ID, SUBSCRIPTION_TYPE, WATCH_TIME_HOURS, LAST_LOGIN];

/// Key used for invalid records that have no user identifier.
pub const UNKNOWN_USER_ID: &str = "UnknownID";

/// The declared fields of a subscription row, resolved from a [`RawRecord`].
///
/// A field is `None` when its column is absent or its value is empty.
/// Extra columns in the raw record are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionRecord<'a> {
    pub user_id: Option<&'a str>,
    pub subscription_type: Option<&'a str>,
    pub watch_time_hours: Option<&'a str>,
    pub last_login: Option<&'a str>,
}

impl<'a> SubscriptionRecord<'a> {
    /// Resolve the declared fields from a raw record.
    pub fn from_raw(raw: &'a RawRecord) -> Self {
        let field = |name: &str| {
            raw.get(name)
                .map(|value| value.as_str())
                .filter(|value| !value.is_empty())
        };

        Self {
            user_id: field(USER_ID),
            subscription_type: field(SUBSCRIPTION_TYPE),
            watch_time_hours: field(WATCH_TIME_HOURS),
            last_login: field(LAST_LOGIN),
        }
    }

    /// Identifier used to key this record, falling back to [`UNKNOWN_USER_ID`].
    pub fn user_key(&self) -> &'a str {
        self.user_id.unwrap_or(UNKNOWN_USER_ID)
    }

    /// Names of the missing required fields, in declared order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            self.user_id,
            self.subscription_type,
            self.watch_time_hours,
            self.last_login,
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect()
    }
}
