use chrono::NaiveDate;
use tracing::debug;

use crate::time::calendar::offdaycalendar::OffDayCalendar;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::day_distance;

/// A maximal run of consecutive off days.
///
/// Dates are kept ascending and are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    dates: Vec<NaiveDate>
}

impl Cluster {
    /// Builds a cluster from day-adjacent dates in any order.
    /// Returns `None` when `dates` is empty or has a hole.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Option<Cluster> {
        let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
        dates.sort_unstable();
        dates.dedup();
        if dates.is_empty() || dates.windows(2).any(|w| (w[1] - w[0]).num_days() != 1) {
            None
        } else {
            Some(Cluster { dates })
        }
    }

    pub fn first(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of member dates at most `window` days away from `d`.
    pub fn count_within(&self, d: NaiveDate, window: i64) -> usize {
        self.dates.iter().filter(|c| day_distance(**c, d) <= window).count()
    }
}

/// Groups the off days of `[start, end]` into maximal consecutive runs, in
/// chronological order. `start > end` yields no clusters.
pub fn build_clusters<C: OffDayCalendar + ?Sized>(start: NaiveDate, end: NaiveDate, calendar: &C) -> Vec<Cluster> {
    if start > end {
        return Vec::new();
    }

    let mut clusters: Vec<Cluster> = Vec::new();
    let mut current: Vec<NaiveDate> = Vec::new();

    for d in RangeOfDates::new(start, end).iter() {
        if calendar.is_off_day(d) {
            current.push(d);
        } else if !current.is_empty() {
            clusters.push(Cluster { dates: std::mem::take(&mut current) });
        }
    }

    if !current.is_empty() {
        clusters.push(Cluster { dates: current });
    }

    debug!(%start, %end, clusters = clusters.len(), "built off-day clusters");
    clusters
}
