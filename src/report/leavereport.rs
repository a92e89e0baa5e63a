use std::fmt;

use chrono::Datelike;
use serde::Serialize;

use crate::planner::consecutiveperiod::{ConsecutivePeriod, calculate_consecutive_periods};
use crate::planner::leaveselector::LeavePlan;
use crate::report::reportlocale::ReportLocale;
use crate::time::calendar::holidayset::HolidaySet;
use crate::time::calendar::jointcalendar::JointCalendar;
use crate::time::calendar::offdaycalendar::OffDayCalendar;
use crate::time::rangeofdates::RangeOfDates;

/// Everything printed for one planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveReport {
    year: i32,
    max_leaves: usize,
    leaves: LeavePlan,
    periods: Vec<ConsecutivePeriod>,
    total_consecutive_days: usize,
    total_off_days: usize
}

impl LeaveReport {
    pub fn new(year: i32, max_leaves: usize, leaves: LeavePlan, holidays: &HolidaySet) -> LeaveReport {
        let periods = calculate_consecutive_periods(leaves.dates(), holidays);
        let total_consecutive_days = periods.iter().map(|p| p.len()).sum();

        let leave_set: HolidaySet = leaves.iter().collect();
        let joint = JointCalendar::union(holidays, &leave_set);
        let total_off_days = RangeOfDates::of_year(year)
            .map(|range| joint.off_days_in(&range).len())
            .unwrap_or(0);

        LeaveReport {
            year,
            max_leaves,
            leaves,
            periods,
            total_consecutive_days,
            total_off_days
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn max_leaves(&self) -> usize {
        self.max_leaves
    }

    pub fn leaves(&self) -> &LeavePlan {
        &self.leaves
    }

    pub fn periods(&self) -> &[ConsecutivePeriod] {
        &self.periods
    }

    pub fn total_consecutive_days(&self) -> usize {
        self.total_consecutive_days
    }

    /// Weekends, holidays and leaves of the year, each day counted once.
    pub fn total_off_days(&self) -> usize {
        self.total_off_days
    }

    /// Leave days falling outside the planning year, left out of
    /// [`total_off_days`](Self::total_off_days).
    pub fn leaves_outside_year(&self) -> usize {
        self.leaves.iter().filter(|d| d.year() != self.year).count()
    }

    /// Text form of the report in `locale`.
    pub fn localized(&self, locale: ReportLocale) -> LocalizedReport<'_> {
        LocalizedReport { report: self, locale }
    }

    pub fn render(&self, locale: ReportLocale) -> String {
        self.localized(locale).to_string()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub struct LocalizedReport<'a> {
    report: &'a LeaveReport,
    locale: ReportLocale
}

impl fmt::Display for LocalizedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (report, locale) = (self.report, self.locale);
        writeln!(f)?;
        writeln!(f, "{}", locale.plan_heading(report.year, report.max_leaves, report.leaves.len()))?;
        for d in report.leaves.iter() {
            writeln!(f, "{}", locale.long_date(d))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", locale.periods_heading())?;
        for period in report.periods.iter() {
            writeln!(f, "{}", locale.period_line(period.start(), period.end(), period.len()))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", locale.total_consecutive_line(report.total_consecutive_days))?;
        writeln!(f, "{}", locale.total_off_days_line(report.year, report.total_off_days, report.leaves_outside_year()))
    }
}
