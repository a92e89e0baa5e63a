use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::planner::cluster::build_clusters;
use crate::planner::gapscorer::{LeaveCandidate, score_gaps};
use crate::planner::plannererror::PlannerError;
use crate::time::calendar::holidayset::HolidaySet;
use crate::time::utility::shift_days;

pub const DEFAULT_MAX_LEAVES: usize = 14;

/// Days scanned before the first and after the last holiday.
pub const SCAN_PADDING_DAYS: i64 = 10;

/// Upper bound on the number of leave days to propose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveBudget(usize);

impl LeaveBudget {
    pub fn new(max_leaves: usize) -> LeaveBudget {
        LeaveBudget(max_leaves)
    }

    /// Rejects negative budgets.
    pub fn try_new(max_leaves: i64) -> Result<LeaveBudget, PlannerError> {
        usize::try_from(max_leaves)
            .map(LeaveBudget)
            .map_err(|_| PlannerError::InvalidParameter { value: max_leaves })
    }

    /// Negative budgets become zero.
    pub fn clamped(max_leaves: i64) -> LeaveBudget {
        LeaveBudget::try_new(max_leaves).unwrap_or_else(|err| {
            warn!(%err, "clamping leave budget to 0");
            LeaveBudget(0)
        })
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for LeaveBudget {
    fn default() -> Self {
        LeaveBudget(DEFAULT_MAX_LEAVES)
    }
}

/// Chosen leave days, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LeavePlan {
    dates: Vec<NaiveDate>
}

impl LeavePlan {
    pub fn new(mut dates: Vec<NaiveDate>) -> LeavePlan {
        dates.sort_unstable();
        dates.dedup();
        LeavePlan { dates }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
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
}

/// Ranks candidates by descending score, earlier date first on ties, keeps
/// the best `max_leaves` and returns them in date order.
pub fn select_leaves(mut candidates: Vec<LeaveCandidate>, max_leaves: usize) -> LeavePlan {
    candidates.sort_by_key(|c| (Reverse(c.score()), c.date()));
    let chosen: Vec<NaiveDate> = candidates
        .into_iter()
        .take(max_leaves)
        .map(|c| c.date())
        .collect();
    LeavePlan::new(chosen)
}

/// Proposes at most `max_leaves` leave days around `holidays`.
///
/// The scan covers the holidays padded by [`SCAN_PADDING_DAYS`] on both
/// sides. Negative budgets are clamped to zero; an empty holiday set yields
/// an empty plan.
pub fn find_efficient_leaves(holidays: &HolidaySet, max_leaves: i64) -> LeavePlan {
    let budget = LeaveBudget::clamped(max_leaves);
    let (Some(first), Some(last)) = (holidays.first(), holidays.last()) else {
        warn!("no holidays given, nothing to plan around");
        return LeavePlan::default();
    };

    let start = shift_days(first, -SCAN_PADDING_DAYS);
    let end = shift_days(last, SCAN_PADDING_DAYS);
    let clusters = build_clusters(start, end, holidays);
    let candidates = score_gaps(&clusters, holidays);
    let candidate_count = candidates.len();
    let plan = select_leaves(candidates, budget.get());

    info!(%start, %end, candidates = candidate_count, chosen = plan.len(), budget = budget.get(),
          "leave plan ready");
    plan
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn selection_prefers_score_then_date() {
        let candidates = vec![
            LeaveCandidate::new(date(2025, 3, 5), 10),
            LeaveCandidate::new(date(2025, 1, 2), 12),
            LeaveCandidate::new(date(2025, 2, 7), 22),
            LeaveCandidate::new(date(2025, 1, 3), 12)
        ];
        let plan = select_leaves(candidates, 2);
        assert_eq!(plan.dates(), &[date(2025, 1, 2), date(2025, 2, 7)]);
    }

    #[test]
    fn ties_resolve_to_the_earlier_date() {
        let candidates = vec![
            LeaveCandidate::new(date(2025, 5, 2), 14),
            LeaveCandidate::new(date(2025, 4, 2), 14),
            LeaveCandidate::new(date(2025, 4, 3), 14)
        ];
        let plan = select_leaves(candidates, 1);
        assert_eq!(plan.dates(), &[date(2025, 4, 2)]);
    }

    #[test]
    fn zero_budget_is_empty() {
        let candidates = vec![LeaveCandidate::new(date(2025, 1, 2), 12)];
        assert!(select_leaves(candidates, 0).is_empty());
    }

    #[test]
    fn budget_larger_than_candidates() {
        let candidates = vec![
            LeaveCandidate::new(date(2025, 1, 3), 12),
            LeaveCandidate::new(date(2025, 1, 2), 12)
        ];
        let plan = select_leaves(candidates, 10);
        assert_eq!(plan.dates(), &[date(2025, 1, 2), date(2025, 1, 3)]);
    }

    #[test]
    fn budgets() {
        assert_eq!(LeaveBudget::try_new(3), Ok(LeaveBudget::new(3)));
        assert_eq!(LeaveBudget::try_new(-1), Err(PlannerError::InvalidParameter { value: -1 }));
        assert_eq!(LeaveBudget::clamped(-5).get(), 0);
        assert_eq!(LeaveBudget::clamped(5).get(), 5);
        assert_eq!(LeaveBudget::default().get(), DEFAULT_MAX_LEAVES);
    }

    #[test]
    fn negative_budget_plans_nothing() {
        let holidays: HolidaySet = [date(2025, 5, 1)].into_iter().collect();
        assert!(find_efficient_leaves(&holidays, -3).is_empty());
    }

    #[test]
    fn empty_holidays_plan_nothing() {
        assert!(find_efficient_leaves(&HolidaySet::default(), 14).is_empty());
    }

    #[test]
    fn bridges_a_thursday_holiday() {
        // Thu 1 May 2025: Friday 2 May is the best bridge
        let holidays: HolidaySet = [date(2025, 5, 1)].into_iter().collect();
        let plan = find_efficient_leaves(&holidays, 1);
        assert_eq!(plan.dates(), &[date(2025, 5, 2)]);
    }

    #[test]
    fn plan_serializes_as_a_date_list() {
        let plan = LeavePlan::new(vec![date(2025, 5, 2), date(2025, 3, 28)]);
        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(json, r#"["2025-03-28","2025-05-02"]"#);
    }
}
