use chrono::NaiveDate;

use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::is_weekend;

/// A calendar that knows which days are holidays. Weekends are always
/// Saturday and Sunday; a day is off when it is a holiday or a weekend day.
pub trait OffDayCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    fn is_weekend(&self, d: NaiveDate) -> bool {
        is_weekend(d)
    }

    fn is_off_day(&self, d: NaiveDate) -> bool {
        self.is_holiday(d) || self.is_weekend(d)
    }

    fn is_working_day(&self, d: NaiveDate) -> bool {
        !self.is_off_day(d)
    }

    /// All off days within `range`, ascending.
    fn off_days_in(&self, range: &RangeOfDates) -> Vec<NaiveDate> {
        range.iter().filter(|d| self.is_off_day(*d)).collect()
    }
}
