use chrono::{NaiveDate, Utc};

/// Returns the number of calendar days a leave window covers, inclusive of
/// both endpoints: `days_between(d, d) == 1`.
///
/// Symmetric in its arguments; callers validate date order before storing a
/// window, so a reversed range never reaches the store.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    (end - start).num_days().unsigned_abs() as u32 + 1
}

/// Returns today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
