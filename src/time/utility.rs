use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

pub const ONE_DAY: Days = Days::new(1);

/// Saturday and Sunday are the only weekend days.
#[inline]
pub fn is_weekend (d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Moves `d` by a signed number of days.
#[inline]
pub fn shift_days (d: NaiveDate, n: i64) -> NaiveDate {
    if n >= 0 {
        d + Days::new(n as u64)
    } else {
        d - Days::new(n.unsigned_abs())
    }
}

/// Absolute distance between two dates, in days.
#[inline]
pub fn day_distance (d1: NaiveDate, d2: NaiveDate) -> i64 {
    (d1 - d2).num_days().abs()
}
