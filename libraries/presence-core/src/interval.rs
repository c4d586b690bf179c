//! Interval conversion
//!
//! Presence data arrives as seconds elapsed since local midnight. Charting
//! code positions events on a time-of-day axis, which needs a full
//! calendar-time value. The date part is a fixed placeholder and carries no
//! meaning downstream.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Fixed date every converted interval is anchored to (1 February 1901).
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1901, 2, 1) {
    Some(date) => date,
    None => panic!("reference date is a valid calendar date"),
};

/// Seconds in one day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Convert seconds since midnight into a calendar-time value.
///
/// The time-of-day component of the result equals `value` seconds past
/// midnight. Values of a day or more roll over into the following days of
/// [`REFERENCE_DATE`] instead of being rejected.
///
/// # Example
///
/// ```rust
/// use presence_core::parse_interval;
/// use chrono::Timelike;
///
/// let at = parse_interval(3661);
/// assert_eq!((at.hour(), at.minute(), at.second()), (1, 1, 1));
/// ```
pub fn parse_interval(value: u32) -> NaiveDateTime {
    REFERENCE_DATE.and_time(NaiveTime::MIN) + Duration::seconds(i64::from(value))
}

/// Time-of-day component of [`parse_interval`].
pub fn time_of_day(value: u32) -> NaiveTime {
    parse_interval(value).time()
}

/// Narrow a JSON number of seconds to an interval.
///
/// Means are computed server-side and may be fractional; they are rounded to
/// the nearest second. Negative and NaN inputs become zero.
pub fn interval_from_secs_f64(seconds: f64) -> u32 {
    if seconds.is_nan() || seconds <= 0.0 {
        return 0;
    }
    if seconds >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    seconds.round() as u32
}
