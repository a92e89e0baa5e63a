use chrono::NaiveDate;

use crate::time::calendar::offdaycalendar::OffDayCalendar;

/// Union of two calendars: a date is a holiday if it is a holiday in
/// EITHER calendar. Used to lay chosen leave days over public holidays.
pub struct JointCalendar<'a> {
    c1: &'a dyn OffDayCalendar,
    c2: &'a dyn OffDayCalendar
}

impl<'a> JointCalendar<'a> {
    pub fn union(c1: &'a dyn OffDayCalendar, c2: &'a dyn OffDayCalendar) -> JointCalendar<'a> {
        JointCalendar { c1, c2 }
    }
}

impl OffDayCalendar for JointCalendar<'_> {
    #[inline]
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.c1.is_holiday(d) || self.c2.is_holiday(d)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::holidayset::HolidaySet;
    use crate::time::rangeofdates::RangeOfDates;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn union_of_holidays_and_leaves() {
        let holidays: HolidaySet = [date(2025, 5, 1)].into_iter().collect();
        let leaves: HolidaySet = [date(2025, 5, 2)].into_iter().collect();
        let joint = JointCalendar::union(&holidays, &leaves);

        assert!(joint.is_holiday(date(2025, 5, 1)));
        assert!(joint.is_holiday(date(2025, 5, 2)));
        assert!(!joint.is_holiday(date(2025, 5, 5)));

        // Thu 1 May through Sun 4 May are all off
        let range = RangeOfDates::new(date(2025, 4, 30), date(2025, 5, 5));
        assert_eq!(joint.off_days_in(&range), vec![
            date(2025, 5, 1),
            date(2025, 5, 2),
            date(2025, 5, 3),
            date(2025, 5, 4)
        ]);
    }
}
