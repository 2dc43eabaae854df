//! Time-derived identifiers for store records.

use chrono::{DateTime, Utc};

/// Returns the unix-millisecond id for `at`, bumped upward past any value
/// `is_taken` reports as used. Keeps ids unique within a collection even
/// when several records are created in the same millisecond.
pub fn allocate_id(at: DateTime<Utc>, is_taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = at.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !is_taken(&id) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn allocate_id_uses_millisecond_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let id = allocate_id(at, |_| false);
        assert_eq!(id, at.timestamp_millis().to_string());
    }

    #[test]
    fn allocate_id_bumps_past_taken_values() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let base = at.timestamp_millis();
        let taken = [base.to_string(), (base + 1).to_string()];
        let id = allocate_id(at, |candidate| taken.iter().any(|t| t == candidate));
        assert_eq!(id, (base + 2).to_string());
    }
}
