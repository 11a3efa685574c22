//! Calendar arithmetic shared by the analytics engine.
//!
//! All helpers take time as explicit parameters; nothing here reads a clock.

use chrono::{DateTime, Datelike, Months, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Month indices (1–12) for a rolling window of `len` calendar months ending
/// at `now`'s month, oldest first. Wraps the year boundary.
///
/// `rolling_months(2026-02-xx, 6)` → `[9, 10, 11, 12, 1, 2]`.
pub fn rolling_months(now: DateTime<Utc>, len: u32) -> Vec<u32> {
    let anchor = i64::from(now.month0());
    (0..i64::from(len))
        .map(|i| {
            let back = i64::from(len) - 1 - i;
            ((anchor - back).rem_euclid(12) + 1) as u32
        })
        .collect()
}

/// Whole days elapsed from `past` to `now`, rounded toward negative infinity.
pub fn whole_days_since(now: DateTime<Utc>, past: DateTime<Utc>) -> i64 {
    (now - past).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Whole days from `now` until `target`, rounded toward positive infinity.
/// Negative when `target` is already in the past.
pub fn whole_days_until(now: DateTime<Utc>, target: DateTime<Utc>) -> i64 {
    ((target - now).num_seconds() + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY)
}

/// Whether `ts` falls in the half-open window `[now - months, now)`, using
/// calendar-month arithmetic (not a fixed day count).
///
/// If the subtraction is not representable the window is treated as empty.
pub fn within_trailing_months(now: DateTime<Utc>, months: u32, ts: DateTime<Utc>) -> bool {
    match now.checked_sub_months(Months::new(months)) {
        Some(start) => ts >= start && ts < now,
        None => false,
    }
}

/// Whether two instants share the same calendar month *and* year.
pub fn same_calendar_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    #[test]
    fn rolling_window_wraps_year_boundary() {
        assert_eq!(rolling_months(utc(2026, 2, 10, 12), 6), vec![9, 10, 11, 12, 1, 2]);
        assert_eq!(rolling_months(utc(2026, 8, 1, 0), 6), vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(rolling_months(utc(2026, 1, 31, 23), 6), vec![8, 9, 10, 11, 12, 1]);
    }

    #[test]
    fn rolling_window_always_ends_at_now_month() {
        for month in 1..=12 {
            let now = utc(2025, month, 15, 0);
            let window = rolling_months(now, 6);
            assert_eq!(window.len(), 6);
            assert_eq!(*window.last().unwrap(), month);
        }
    }

    #[test]
    fn days_since_floors() {
        let now = utc(2026, 6, 10, 12);
        assert_eq!(whole_days_since(now, utc(2026, 6, 9, 12)), 1);
        assert_eq!(whole_days_since(now, utc(2026, 6, 9, 13)), 0);
        assert_eq!(whole_days_since(now, utc(2026, 6, 1, 12)), 9);
    }

    #[test]
    fn days_until_ceils() {
        let now = utc(2026, 6, 10, 12);
        // A minute from now still counts as "1 day remaining".
        assert_eq!(whole_days_until(now, utc(2026, 6, 10, 13)), 1);
        assert_eq!(whole_days_until(now, utc(2026, 6, 20, 12)), 10);
        // Already expired: 5 days and a bit in the past rounds up to -5.
        assert_eq!(whole_days_until(now, utc(2026, 6, 5, 6)), -5);
        assert_eq!(whole_days_until(now, now), 0);
    }

    #[test]
    fn trailing_window_is_half_open() {
        let now = utc(2026, 6, 10, 12);
        let start = utc(2026, 3, 10, 12);

        assert!(within_trailing_months(now, 3, start));
        assert!(within_trailing_months(now, 3, utc(2026, 5, 1, 0)));
        assert!(!within_trailing_months(now, 3, utc(2026, 3, 10, 11)));
        assert!(!within_trailing_months(now, 3, now));
        assert!(!within_trailing_months(now, 3, utc(2026, 7, 1, 0)));
    }

    #[test]
    fn calendar_month_match_requires_year() {
        assert!(same_calendar_month(utc(2026, 6, 1, 0), utc(2026, 6, 30, 23)));
        assert!(!same_calendar_month(utc(2026, 6, 1, 0), utc(2025, 6, 1, 0)));
        assert!(!same_calendar_month(utc(2026, 6, 1, 0), utc(2026, 7, 1, 0)));
    }
}
