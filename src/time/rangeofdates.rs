use chrono::NaiveDate;

use crate::time::utility::{
    ONE_DAY,
    is_weekend,
    shift_days
};

/// Inclusive, ascending range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    /// Days strictly after `after` and strictly before `before`.
    /// Returns `None` when no such day exists.
    pub fn strictly_between(after: NaiveDate, before: NaiveDate) -> Option<RangeOfDates> {
        if (before - after).num_days() <= 1 {
            None
        } else {
            Some(RangeOfDates {
                start_date: after + ONE_DAY,
                end_date: before - ONE_DAY
            })
        }
    }

    /// January 1st through December 31st of `year`.
    pub fn of_year(year: i32) -> Option<RangeOfDates> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(RangeOfDates::new(start, end))
    }

    /// Widens the range by `days` on both ends.
    pub fn padded(&self, days: i64) -> RangeOfDates {
        RangeOfDates::new(
            shift_days(self.start_date, -days),
            shift_days(self.end_date, days)
        )
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            next: Some(self.start_date),
            end_date: self.end_date
        }
    }

    /// Number of Monday-to-Friday days in the range.
    pub fn count_weekdays(&self) -> usize {
        self.iter().filter(|d| !is_weekend(*d)).count()
    }
}

impl IntoIterator for &RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct RangeOfDatesIterator {
    next: Option<NaiveDate>,
    end_date: NaiveDate
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.end_date)?;
        self.next = current.checked_add_days(ONE_DAY);
        Some(current)
    }
}
