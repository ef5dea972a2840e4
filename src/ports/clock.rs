use chrono::{DateTime, Utc};

/// Port for the wall clock used in backup names and operation records.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
