use std::fmt;
use std::str::FromStr;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"
];

const TURKISH_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran",
    "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık"
];

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"
];

const TURKISH_WEEKDAYS: [&str; 7] = [
    "Pazartesi", "Salı", "Çarşamba", "Perşembe", "Cuma", "Cumartesi", "Pazar"
];

/// Language of the printed report.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum ReportLocale {
    #[default]
    English,
    Turkish
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale '{0}' (expected English or Turkish)")]
pub struct ParseLocaleError(String);

impl FromStr for ReportLocale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" | "en_us" | "en-us" => Ok(ReportLocale::English),
            "turkish" | "tr" | "tr_tr" | "tr-tr" => Ok(ReportLocale::Turkish),
            _ => Err(ParseLocaleError(s.to_owned()))
        }
    }
}

impl fmt::Display for ReportLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLocale::English => write!(f, "English"),
            ReportLocale::Turkish => write!(f, "Turkish")
        }
    }
}

impl ReportLocale {
    pub fn month_name(&self, month: u32) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        match self {
            ReportLocale::English => ENGLISH_MONTHS[index],
            ReportLocale::Turkish => TURKISH_MONTHS[index]
        }
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        let index = weekday.num_days_from_monday() as usize;
        match self {
            ReportLocale::English => ENGLISH_WEEKDAYS[index],
            ReportLocale::Turkish => TURKISH_WEEKDAYS[index]
        }
    }

    /// "05 June 2025, Thursday"
    pub fn long_date(&self, d: NaiveDate) -> String {
        format!("{:02} {} {}, {}", d.day(), self.month_name(d.month()), d.year(), self.weekday_name(d.weekday()))
    }

    /// "05 June"
    pub fn short_date(&self, d: NaiveDate) -> String {
        format!("{:02} {}", d.day(), self.month_name(d.month()))
    }

    pub fn prompt(&self, default: usize) -> String {
        match self {
            ReportLocale::English => format!("Enter the maximum number of leave days (default {default}): "),
            ReportLocale::Turkish => format!("Maksimum izin günü sayısını girin (varsayılan {default}): ")
        }
    }

    pub fn invalid_input(&self, default: usize) -> String {
        match self {
            ReportLocale::English => format!("Invalid input. Using the default of {default} days."),
            ReportLocale::Turkish => format!("Geçersiz giriş. Varsayılan değer olan {default} gün kullanılacak.")
        }
    }

    pub fn plan_heading(&self, year: i32, max_leaves: usize, used: usize) -> String {
        match self {
            ReportLocale::English => format!("Suggested leave days for {year} (using {used} of {max_leaves} days):"),
            ReportLocale::Turkish => format!("{year} için Önerilen İzin Günleri ({max_leaves} günün {used} günü kullanılıyor):")
        }
    }

    pub fn periods_heading(&self) -> &'static str {
        match self {
            ReportLocale::English => "Long weekends / holiday periods:",
            ReportLocale::Turkish => "Uzun Hafta Sonu/Tatil Dönemleri:"
        }
    }

    pub fn period_line(&self, start: NaiveDate, end: NaiveDate, days: usize) -> String {
        let (start, end) = (self.short_date(start), self.short_date(end));
        match self {
            ReportLocale::English => format!("- {start} to {end}: {days} days"),
            ReportLocale::Turkish => format!("- {start} ile {end} arası: {days} gün")
        }
    }

    pub fn total_consecutive_line(&self, days: usize) -> String {
        match self {
            ReportLocale::English => format!("Total consecutive holiday days: {days}"),
            ReportLocale::Turkish => format!("Toplam ardışık tatil günleri: {days}")
        }
    }

    /// `outside_year` leave days fall in a neighbouring year and are not in `days`.
    pub fn total_off_days_line(&self, year: i32, days: usize, outside_year: usize) -> String {
        let line = match self {
            ReportLocale::English => format!("Total days off in {year} (all weekends + public holidays + leave): {days}"),
            ReportLocale::Turkish => format!("{year}'te toplam tatil günleri (tüm haftasonları + resmi tatiller + izinler): {days}")
        };
        if outside_year == 0 {
            return line;
        }
        match self {
            ReportLocale::English => format!("{line} ({outside_year} leave days outside {year} not counted)"),
            ReportLocale::Turkish => format!("{line} ({year} dışındaki {outside_year} izin günü sayılmadı)")
        }
    }
}
