use chrono::{Datelike, NaiveDate};
use serde::{
    Serialize,
    Deserialize
};
use tracing::warn;

use crate::planner::plannererror::PlannerError;
use crate::time::calendar::holidayset::HolidaySet;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The dates a single holiday covers, as written in the holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HolidayDates {
    Single(String),
    Multiple(Vec<String>)
}

impl HolidayDates {
    pub fn as_slice(&self) -> &[String] {
        match self {
            HolidayDates::Single(date) => std::slice::from_ref(date),
            HolidayDates::Multiple(dates) => dates.as_slice()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    name: String,
    dates: HolidayDates
}

impl HolidayEntry {
    pub fn new(name: String, dates: HolidayDates) -> HolidayEntry {
        HolidayEntry { name, dates }
    }

    pub fn single(name: &str, date: &str) -> HolidayEntry {
        HolidayEntry::new(name.to_owned(), HolidayDates::Single(date.to_owned()))
    }

    pub fn multiple(name: &str, dates: &[&str]) -> HolidayEntry {
        HolidayEntry::new(
            name.to_owned(),
            HolidayDates::Multiple(dates.iter().map(|d| (*d).to_owned()).collect())
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dates(&self) -> &HolidayDates {
        &self.dates
    }

    /// Parses every date of this holiday.
    pub fn parse_dates(&self) -> Result<Vec<NaiveDate>, PlannerError> {
        let raw = self.dates.as_slice();
        if raw.is_empty() {
            return Err(PlannerError::EmptyHoliday { holiday: self.name.clone() });
        }
        raw.iter()
            .map(|value| {
                NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
                    PlannerError::MalformedDate {
                        holiday: self.name.clone(),
                        value: value.clone(),
                        source
                    }
                })
            })
            .collect()
    }
}

/// A named table of public holidays for one planning year.
///
/// Holiday names need not be unique; a holiday may span several days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    name: String,
    #[serde(default)]
    year: Option<i32>,
    holidays: Vec<HolidayEntry>
}

impl HolidayCalendar {
    pub fn new(name: String, year: Option<i32>, holidays: Vec<HolidayEntry>) -> HolidayCalendar {
        HolidayCalendar { name, year, holidays }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn holidays(&self) -> &[HolidayEntry] {
        &self.holidays
    }

    /// Turkish public holidays of 2025.
    pub fn turkey_2025() -> HolidayCalendar {
        HolidayCalendar::new("Turkey2025".to_owned(), Some(2025), vec![
            HolidayEntry::single("Yılbaşı", "2025-01-01"),
            HolidayEntry::multiple("Ramazan Bayramı", &["2025-03-30", "2025-03-31", "2025-04-01"]),
            HolidayEntry::single("Ulusal Egemenlik ve Çocuk Bayramı", "2025-04-23"),
            HolidayEntry::single("İşçi Bayramı", "2025-05-01"),
            HolidayEntry::single("Gençlik ve Spor Bayramı", "2025-05-19"),
            HolidayEntry::multiple("Kurban Bayramı", &["2025-06-06", "2025-06-07", "2025-06-08", "2025-06-09"]),
            HolidayEntry::single("Demokrasi ve Milli Birlik Günü", "2025-07-15"),
            HolidayEntry::single("Zafer Bayramı", "2025-08-30"),
            HolidayEntry::multiple("Cumhuriyet Bayramı", &["2025-10-29"])
        ])
    }

    /// The planning year: the declared one, else the year of the earliest holiday.
    pub fn planning_year(&self, holiday_set: &HolidaySet) -> Option<i32> {
        self.year.or_else(|| holiday_set.first().map(|d| d.year()))
    }
}

/// Flattens a holiday table into its distinct dates.
pub fn build_holiday_dates(calendar: &HolidayCalendar) -> Result<HolidaySet, PlannerError> {
    let mut holiday_set = HolidaySet::default();
    for entry in calendar.holidays.iter() {
        let dates = entry.parse_dates()?;
        if let Some(year) = calendar.year {
            for d in dates.iter().filter(|d| d.year() != year) {
                warn!(calendar = calendar.name(), holiday = entry.name(), date = %d, year,
                      "holiday date falls outside the planning year");
            }
        }
        holiday_set.extend(dates);
    }
    Ok(holiday_set)
}
