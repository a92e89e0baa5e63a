use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace};

use crate::planner::cluster::Cluster;
use crate::time::calendar::offdaycalendar::OffDayCalendar;
use crate::time::rangeofdates::RangeOfDates;

pub const BASE_SCORE: i32 = 15;
pub const MAX_GAP_WORKING_DAYS: usize = 7;
pub const ADJACENCY_WINDOW_DAYS: i64 = 7;
pub const ADJACENCY_BONUS: i32 = 5;
pub const FIRST_BONUS_THRESHOLD: usize = 7;
pub const SECOND_BONUS_THRESHOLD: usize = 10;

/// Constants of the leave scoring heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    pub base_score: i32,
    pub max_gap_working_days: usize,
    pub adjacency_window_days: i64,
    pub adjacency_bonus: i32,
    pub first_bonus_threshold: usize,
    pub second_bonus_threshold: usize
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        ScoringPolicy {
            base_score: BASE_SCORE,
            max_gap_working_days: MAX_GAP_WORKING_DAYS,
            adjacency_window_days: ADJACENCY_WINDOW_DAYS,
            adjacency_bonus: ADJACENCY_BONUS,
            first_bonus_threshold: FIRST_BONUS_THRESHOLD,
            second_bonus_threshold: SECOND_BONUS_THRESHOLD
        }
    }
}

impl ScoringPolicy {
    /// Score of taking `day` off inside a gap of `working_days` between
    /// `before` and `after`. Smaller gaps score higher; a day close to many
    /// off days of the surrounding clusters earns up to two bonuses.
    pub fn score(&self, day: NaiveDate, working_days: usize, before: &Cluster, after: &Cluster) -> i32 {
        let mut score = self.base_score - working_days as i32;
        let adjacent_days = before.count_within(day, self.adjacency_window_days)
            + after.count_within(day, self.adjacency_window_days);

        if adjacent_days >= self.first_bonus_threshold {
            score += self.adjacency_bonus;
        }
        if adjacent_days >= self.second_bonus_threshold {
            score += self.adjacency_bonus;
        }
        score
    }
}

/// A working day that could be taken as leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaveCandidate {
    date: NaiveDate,
    score: i32
}

impl LeaveCandidate {
    pub fn new(date: NaiveDate, score: i32) -> LeaveCandidate {
        LeaveCandidate { date, score }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn score(&self) -> i32 {
        self.score
    }
}

/// Scores every bridgeable working day between adjacent clusters with the
/// default policy.
pub fn score_gaps<C: OffDayCalendar + ?Sized>(clusters: &[Cluster], calendar: &C) -> Vec<LeaveCandidate> {
    score_gaps_with(clusters, calendar, &ScoringPolicy::default())
}

pub fn score_gaps_with<C: OffDayCalendar + ?Sized>(
    clusters: &[Cluster],
    calendar: &C,
    policy: &ScoringPolicy
) -> Vec<LeaveCandidate> {
    let mut candidates: Vec<LeaveCandidate> = Vec::new();

    for pair in clusters.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        let Some(gap) = RangeOfDates::strictly_between(before.last(), after.first()) else {
            continue;
        };

        let working_days = gap.count_weekdays();
        if working_days > policy.max_gap_working_days {
            debug!(gap_start = %gap.start_date(), gap_end = %gap.end_date(), working_days,
                   "gap too wide to bridge");
            continue;
        }

        for day in gap.iter() {
            if calendar.is_weekend(day) || calendar.is_holiday(day) {
                continue;
            }
            let score = policy.score(day, working_days, before, after);
            trace!(%day, score, "leave candidate");
            candidates.push(LeaveCandidate::new(day, score));
        }
    }

    candidates
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::holidayset::HolidaySet;
    use crate::time::utility::{is_weekend, shift_days};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn run(first: NaiveDate, last: NaiveDate) -> Cluster {
        Cluster::from_dates(RangeOfDates::new(first, last).iter()).unwrap()
    }

    #[test]
    fn three_day_gap_without_bonus() {
        // Mon 6 .. Wed 8 Jan 2025 between 6 nearby off days
        let clusters = vec![
            run(date(2025, 1, 4), date(2025, 1, 5)),
            run(date(2025, 1, 9), date(2025, 1, 12))
        ];
        let candidates = score_gaps(&clusters, &HolidaySet::default());
        assert_eq!(candidates, vec![
            LeaveCandidate::new(date(2025, 1, 6), 12),
            LeaveCandidate::new(date(2025, 1, 7), 12),
            LeaveCandidate::new(date(2025, 1, 8), 12)
        ]);
    }

    #[test]
    fn first_adjacency_bonus() {
        // nine cluster days, all within a week of every gap day
        let clusters = vec![
            run(date(2025, 1, 1), date(2025, 1, 5)),
            run(date(2025, 1, 9), date(2025, 1, 12))
        ];
        let candidates = score_gaps(&clusters, &HolidaySet::default());
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.score() == 17));
    }

    #[test]
    fn first_bonus_starts_at_seven_adjacent_days() {
        // Fri 3 .. Sun 5 and Thu 9 .. Sun 12: every gap day sees 3 + 4 off days
        let seven = vec![
            run(date(2025, 1, 3), date(2025, 1, 5)),
            run(date(2025, 1, 9), date(2025, 1, 12))
        ];
        let candidates = score_gaps(&seven, &HolidaySet::default());
        assert_eq!(candidates, vec![
            LeaveCandidate::new(date(2025, 1, 6), 17),
            LeaveCandidate::new(date(2025, 1, 7), 17),
            LeaveCandidate::new(date(2025, 1, 8), 17)
        ]);

        // one off day fewer before the gap leaves 2 + 4
        let six = vec![
            run(date(2025, 1, 4), date(2025, 1, 5)),
            run(date(2025, 1, 9), date(2025, 1, 12))
        ];
        assert_eq!(ScoringPolicy::default().score(date(2025, 1, 7), 3, &six[0], &six[1]), 12);
        assert!(score_gaps(&six, &HolidaySet::default()).iter().all(|c| c.score() == 12));
    }

    #[test]
    fn second_adjacency_bonus() {
        let clusters = vec![
            run(date(2024, 12, 31), date(2025, 1, 5)),
            run(date(2025, 1, 9), date(2025, 1, 13))
        ];
        let candidates = score_gaps(&clusters, &HolidaySet::default());
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.score() == 22));
    }

    #[test]
    fn wide_gap_is_skipped() {
        // Mon 6 .. Wed 15 Jan holds eight working days
        let clusters = vec![
            run(date(2025, 1, 4), date(2025, 1, 5)),
            run(date(2025, 1, 16), date(2025, 1, 19))
        ];
        assert!(score_gaps(&clusters, &HolidaySet::default()).is_empty());
    }

    #[test]
    fn seven_working_days_are_still_bridged() {
        // Mon 6 .. Tue 14 Jan: seven working days plus a weekend
        let clusters = vec![
            run(date(2025, 1, 4), date(2025, 1, 5)),
            run(date(2025, 1, 15), date(2025, 1, 19))
        ];
        let candidates = score_gaps(&clusters, &HolidaySet::default());
        assert_eq!(candidates.len(), 7);
        assert!(candidates.iter().all(|c| !is_weekend(c.date())));
        assert_eq!(candidates[0], LeaveCandidate::new(date(2025, 1, 6), 8));
    }

    #[test]
    fn holidays_inside_a_gap_are_not_candidates() {
        let holidays: HolidaySet = [date(2025, 1, 7)].into_iter().collect();
        let clusters = vec![
            run(date(2025, 1, 4), date(2025, 1, 5)),
            run(date(2025, 1, 9), date(2025, 1, 12))
        ];
        let candidates = score_gaps(&clusters, &holidays);
        let days: Vec<NaiveDate> = candidates.iter().map(|c| c.date()).collect();
        assert_eq!(days, vec![date(2025, 1, 6), date(2025, 1, 8)]);
    }

    #[test]
    fn fewer_than_two_clusters_score_nothing() {
        assert!(score_gaps(&[], &HolidaySet::default()).is_empty());
        let single = vec![run(date(2025, 1, 4), date(2025, 1, 5))];
        assert!(score_gaps(&single, &HolidaySet::default()).is_empty());
    }

    #[test]
    fn custom_policy_changes_the_cutoff() {
        let policy = ScoringPolicy { max_gap_working_days: 2, ..ScoringPolicy::default() };
        let clusters = vec![
            run(date(2025, 1, 4), date(2025, 1, 5)),
            run(date(2025, 1, 9), date(2025, 1, 12))
        ];
        assert!(score_gaps_with(&clusters, &HolidaySet::default(), &policy).is_empty());
    }

    #[test]
    fn policy_score_arithmetic() {
        let policy = ScoringPolicy::default();
        let before = run(date(2025, 1, 4), date(2025, 1, 5));
        let after = run(shift_days(date(2025, 1, 5), 4), shift_days(date(2025, 1, 5), 7));
        assert_eq!(policy.score(date(2025, 1, 6), 3, &before, &after), 12);
        assert_eq!(policy.score(date(2025, 1, 6), 1, &before, &after), 14);
    }
}
