//! Built-in content, defined as static data and loaded into the catalog once.

pub mod critical_care;
pub mod education;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::Entry;

/// Midnight UTC on a calendar date (epoch if the date is invalid)
pub(crate) fn authored_on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// Every built-in entry in catalog order: critical care first, then leveled
/// educational content
pub fn all_entries() -> Vec<Entry> {
    let mut entries = critical_care::entries();
    entries.extend(education::entries());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authored_on() {
        assert_eq!(authored_on(2026, 2, 10).to_rfc3339(), "2026-02-10T00:00:00+00:00");
        assert_eq!(authored_on(2026, 2, 30), DateTime::<Utc>::default());
    }

    #[test]
    fn test_all_entries_order() {
        let entries = all_entries();
        assert_eq!(entries.len(), 35);
        assert_eq!(entries.last().unwrap().id.as_str(), "mental-health-tdah-adhd");
    }
}
