pub mod configuration;

pub mod logging;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod planner {
    pub mod plannererror;
    pub mod cluster;
    pub mod gapscorer;
    pub mod leaveselector;
    pub mod consecutiveperiod;
}

pub mod report {
    pub mod reportlocale;
    pub mod leavereport;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;

    pub mod calendar {
        pub mod offdaycalendar;
        pub mod holidayset;
        pub mod jointcalendar;
        pub mod holidaycalendar;
        pub mod holidaycalendarmanager;
    }
}

pub use planner::consecutiveperiod::{ConsecutivePeriod, calculate_consecutive_periods};
pub use planner::leaveselector::{DEFAULT_MAX_LEAVES, LeavePlan, find_efficient_leaves};
pub use planner::plannererror::PlannerError;
pub use time::calendar::holidaycalendar::{HolidayCalendar, build_holiday_dates};
pub use time::calendar::holidayset::HolidaySet;
