use std::sync::Arc;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::time::calendar::holidaycalendar::{
    HolidayCalendar,
    build_holiday_dates
};

/// Parses a holiday table and checks every date once, so a broken table
/// fails while loading rather than while planning.
fn get_holiday_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<HolidayCalendar>, ManagerError> {
    let calendar: HolidayCalendar = ManagerError::from_json_or_json_parse_error(json_value)?;
    build_holiday_dates(&calendar)?;
    Ok(Arc::new(calendar))
}


pub struct HolidayCalendarManager;


impl HolidayCalendarManager {
    pub fn new() -> Manager<Arc<HolidayCalendar>> {
        Manager::new(get_holiday_calendar_from_json)
    }

    /// A registry holding only the built-in 2025 Turkish calendar.
    pub fn with_builtin() -> Manager<Arc<HolidayCalendar>> {
        let manager = HolidayCalendarManager::new();
        let calendar = HolidayCalendar::turkey_2025();
        manager.insert(calendar.name().to_owned(), Arc::new(calendar));
        manager
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::manager::IManager;
    use crate::planner::plannererror::PlannerError;

    #[test]
    fn loads_calendars_by_name() {
        let manager = HolidayCalendarManager::new();
        manager.insert_obj_from_json(serde_json::json!({
            "name": "Mini",
            "year": 2025,
            "holidays": [ { "name": "İşçi Bayramı", "dates": "2025-05-01" } ]
        })).unwrap();

        let calendar = manager.get("Mini").unwrap();
        assert_eq!(calendar.year(), Some(2025));
        assert_eq!(calendar.holidays().len(), 1);
    }

    #[test]
    fn malformed_dates_fail_at_load_time() {
        let manager = HolidayCalendarManager::new();
        let result = manager.insert_obj_from_json(serde_json::json!({
            "name": "Broken",
            "holidays": [ { "name": "Bad", "dates": ["2025-05-01", "May 2nd"] } ]
        }));
        assert!(matches!(
            result,
            Err(ManagerError::PlannerError(PlannerError::MalformedDate { .. }))
        ));
        assert!(manager.get("Broken").is_err());
    }

    #[test]
    fn builtin_registry() {
        let manager = HolidayCalendarManager::with_builtin();
        assert_eq!(manager.names(), vec!["Turkey2025".to_owned()]);
    }
}
