use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::time::calendar::holidayset::HolidaySet;
use crate::time::calendar::jointcalendar::JointCalendar;
use crate::time::calendar::offdaycalendar::OffDayCalendar;
use crate::time::rangeofdates::RangeOfDates;

pub const MIN_PERIOD_LENGTH: usize = 3;

/// Weekend days this far outside the leave/holiday span still count.
pub const WEEKEND_PADDING_DAYS: i64 = 7;

/// A run of at least [`MIN_PERIOD_LENGTH`] consecutive off days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "PeriodSummary")]
pub struct ConsecutivePeriod {
    dates: Vec<NaiveDate>
}

impl ConsecutivePeriod {
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn start(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn end(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }
}

#[derive(Serialize)]
struct PeriodSummary {
    start: NaiveDate,
    end: NaiveDate,
    days: usize
}

impl From<ConsecutivePeriod> for PeriodSummary {
    fn from(period: ConsecutivePeriod) -> Self {
        PeriodSummary {
            start: period.start(),
            end: period.end(),
            days: period.len()
        }
    }
}

/// Splits ascending dates into day-adjacent runs, keeping the long ones.
fn collect_runs(dates: &[NaiveDate]) -> Vec<ConsecutivePeriod> {
    let mut periods: Vec<ConsecutivePeriod> = Vec::new();
    let mut current: Vec<NaiveDate> = Vec::new();

    for &d in dates {
        let continues = current.last().is_none_or(|prev| (d - *prev).num_days() == 1);
        if !continues {
            let run = std::mem::take(&mut current);
            if run.len() >= MIN_PERIOD_LENGTH {
                periods.push(ConsecutivePeriod { dates: run });
            }
        }
        current.push(d);
    }

    if current.len() >= MIN_PERIOD_LENGTH {
        periods.push(ConsecutivePeriod { dates: current });
    }
    periods
}

/// Every maximal run of three or more off days once `leaves` are taken.
///
/// Off days are the leaves, the holidays and the weekends lying within
/// [`WEEKEND_PADDING_DAYS`] of the earliest and latest of those dates.
pub fn calculate_consecutive_periods(leaves: &[NaiveDate], holidays: &HolidaySet) -> Vec<ConsecutivePeriod> {
    let leave_set: HolidaySet = leaves.iter().copied().collect();
    let bounds = (
        leave_set.iter().chain(holidays.iter()).min(),
        leave_set.iter().chain(holidays.iter()).max()
    );
    let (Some(first), Some(last)) = bounds else {
        return Vec::new();
    };

    let range = RangeOfDates::new(first, last).padded(WEEKEND_PADDING_DAYS);
    let joint = JointCalendar::union(holidays, &leave_set);
    let periods = collect_runs(&joint.off_days_in(&range));

    debug!(periods = periods.len(), start = %range.start_date(), end = %range.end_date(),
           "consecutive periods computed");
    periods
}
