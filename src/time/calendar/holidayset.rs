use std::collections::HashSet;

use chrono::NaiveDate;

use crate::time::calendar::offdaycalendar::OffDayCalendar;

/// Flat set of distinct holiday dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>
}

impl HolidaySet {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.dates.contains(&d)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        self.dates.iter().copied()
    }

    /// Earliest holiday.
    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.iter().min().copied()
    }

    /// Latest holiday.
    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.iter().max().copied()
    }

    pub fn sorted(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.dates.iter().copied().collect();
        dates.sort_unstable();
        dates
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        HolidaySet { dates: iter.into_iter().collect() }
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}

impl OffDayCalendar for HolidaySet {
    #[inline]
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.dates.contains(&d)
    }
}
