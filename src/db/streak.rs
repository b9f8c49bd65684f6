use crate::db::kv::Kv;
use anyhow::Result;
use chrono::{Local, NaiveDate};

const KEY_STREAK: &str = "streak";
const KEY_LAST_ACTIVE_DATE: &str = "last_active_date";

/// Consecutive-day activity counter derived from a last-active-date
/// marker.
pub struct Streak {
    kv: Kv,
}

impl Streak {
    pub fn new() -> Result<Self> {
        Ok(Self { kv: Kv::new()? })
    }

    /// Runs one streak transition for today and returns the resulting
    /// count. No marker (or an unparseable one) starts at 1, the same day
    /// leaves the count untouched, exactly one day since the marker
    /// increments, and any other gap, including a marker in the future,
    /// breaks the streak back to 1.
    pub fn update(&self) -> i64 {
        let today = Local::now().date_naive();
        let current: i64 = self.kv.get(KEY_STREAK).unwrap_or(0);
        let gap = self
            .kv
            .get::<String>(KEY_LAST_ACTIVE_DATE)
            .and_then(|marker| day_gap(&marker, today));

        match gap {
            Some(0) => current,
            Some(1) => self.record(today, current + 1),
            _ => self.record(today, 1),
        }
    }

    /// The stored count, without running a transition.
    pub fn current(&self) -> i64 {
        self.kv.get(KEY_STREAK).unwrap_or(0)
    }

    fn record(&self, today: NaiveDate, count: i64) -> i64 {
        self.kv.save(KEY_STREAK, &count);
        self.kv.save(KEY_LAST_ACTIVE_DATE, &today.to_string());
        count
    }
}

/// Whole days from the stored marker to today, or `None` when the marker
/// does not parse as a date.
fn day_gap(last_active: &str, today: NaiveDate) -> Option<i64> {
    let last = NaiveDate::parse_from_str(last_active, "%Y-%m-%d").ok()?;
    Some(today.signed_duration_since(last).num_days())
}
