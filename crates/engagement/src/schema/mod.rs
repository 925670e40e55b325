//! Schema types: the declared record shape and the plan table.

mod plan;
mod record;

pub use plan::{Plan, PlanTable};
pub use record::{
    SubscriptionRecord, LAST_LOGIN, REQUIRED_FIELDS, SUBSCRIPTION_TYPE, UNKNOWN_USER_ID, USER_ID,
    WATCH_TIME_HOURS,
};
