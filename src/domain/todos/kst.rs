use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Korea Standard Time has no daylight saving, so a fixed offset is exact.
pub const KST_OFFSET_HOURS: i64 = 9;

/// Calendar day in KST for the given instant.
pub fn kst_day(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::hours(KST_OFFSET_HOURS)).date_naive()
}

pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
