use std::cell::{
    Ref,
    RefCell
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::planner::leaveselector::LeaveBudget;
use crate::report::reportlocale::ReportLocale;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarManager;

pub const BUILTIN_CALENDAR: &str = "Turkey2025";


#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct PlannerSettingsJsonProp {
    #[serde(default)]
    default_calendar: Option<String>,
    #[serde(default)]
    default_max_leaves: Option<i64>,
    #[serde(default)]
    locale: Option<ReportLocale>
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_calendar: Vec<serde_json::Value>,
    #[serde(default)]
    planner: PlannerSettingsJsonProp
}

/// Defaults applied when the command line does not say otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerSettings {
    default_calendar: String,
    default_max_leaves: LeaveBudget,
    locale: ReportLocale
}

impl Default for PlannerSettings {
    fn default() -> Self {
        PlannerSettings {
            default_calendar: BUILTIN_CALENDAR.to_owned(),
            default_max_leaves: LeaveBudget::default(),
            locale: ReportLocale::default()
        }
    }
}

impl PlannerSettings {
    pub fn default_calendar(&self) -> &str {
        &self.default_calendar
    }

    pub fn default_max_leaves(&self) -> LeaveBudget {
        self.default_max_leaves
    }

    pub fn locale(&self) -> ReportLocale {
        self.locale
    }
}

pub struct Configuration {
    holiday_calendar_manager: Manager<Arc<HolidayCalendar>>,
    planner_settings_cell: RefCell<PlannerSettings>
}


impl Configuration {
    /// A configuration that knows only the built-in calendar.
    pub fn new() -> Configuration {
        Configuration {
            holiday_calendar_manager: HolidayCalendarManager::with_builtin(),
            planner_settings_cell: RefCell::new(PlannerSettings::default())
        }
    }

    pub fn holiday_calendar_manager(&self) -> &Manager<Arc<HolidayCalendar>> {
        &self.holiday_calendar_manager
    }

    pub fn planner_settings(&self) -> Ref<'_, PlannerSettings> {
        self.planner_settings_cell.borrow()
    }

    /// Looks up `name`, or the configured default calendar.
    pub fn calendar(&self, name: Option<&str>) -> Result<Arc<HolidayCalendar>, ManagerError> {
        let settings = self.planner_settings();
        let name = name.unwrap_or(settings.default_calendar());
        self.holiday_calendar_manager.get(name).inspect_err(|_| {
            warn!(calendar = name, available = ?self.holiday_calendar_manager.names(), "unknown holiday calendar");
        })
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    /// Nothing is registered unless the whole configuration is valid.
    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        let planner = json_prop.planner;
        let max_leaves = planner.default_max_leaves.map(LeaveBudget::try_new).transpose()?;

        let calendars = json_prop.holiday_calendar
            .into_iter()
            .map(|json_value| self.holiday_calendar_manager.obj_from_json(json_value))
            .collect::<Result<Vec<_>, ManagerError>>()?;
        for (name, calendar) in calendars {
            self.holiday_calendar_manager.insert(name, calendar);
        }

        let mut settings = self.planner_settings_cell.borrow_mut();
        if let Some(name) = planner.default_calendar {
            settings.default_calendar = name;
        }
        if let Some(max_leaves) = max_leaves {
            settings.default_max_leaves = max_leaves;
        }
        if let Some(locale) = planner.locale {
            settings.locale = locale;
        }

        info!(calendars = self.holiday_calendar_manager.len(),
              default_calendar = settings.default_calendar.as_str(),
              "configuration loaded");
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
