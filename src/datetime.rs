use crate::error::{Result, WalletFeedError};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// `DD/MM/YYYY`
pub const DATE_FORMAT: &str = "%d/%m/%Y";
/// `HH.MM`, 24-hour with a dot separator (a formatting choice preserved
/// for compatibility with stored records).
pub const TIME_FORMAT: &str = "%H.%M";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H.%M";

/// Display vocabulary for one locale. Passed explicitly so label
/// round-trips stay deterministic in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLocale {
    /// Sentinel label meaning "today at write time".
    pub today: &'static str,
    pub yesterday: &'static str,
    /// Monday-first weekday names.
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
}

impl DisplayLocale {
    pub const ENGLISH: DisplayLocale = DisplayLocale {
        today: "Today",
        yesterday: "Yesterday",
        weekdays: [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ],
        months: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
    };

    pub const INDONESIAN: DisplayLocale = DisplayLocale {
        today: "Hari ini",
        yesterday: "Kemarin",
        weekdays: [
            "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
        ],
        months: [
            "Januari",
            "Februari",
            "Maret",
            "April",
            "Mei",
            "Juni",
            "Juli",
            "Agustus",
            "September",
            "Oktober",
            "November",
            "Desember",
        ],
    };
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(at: NaiveDateTime) -> String {
    at.format(TIME_FORMAT).to_string()
}

/// Epoch-zero instant used as the sort position for unparseable labels.
pub fn epoch() -> NaiveDateTime {
    chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc()
}

/// Resolves the locale's "today" sentinel to a concrete date label.
/// Concrete labels pass through unchanged.
pub fn resolve_date_label(label: &str, today: NaiveDate, locale: &DisplayLocale) -> String {
    if label.trim().eq_ignore_ascii_case(locale.today) {
        format_date(today)
    } else {
        label.to_string()
    }
}

/// Combines a date label and a time label into one instant.
pub fn to_instant(date_label: &str, time_label: &str) -> Result<NaiveDateTime> {
    let combined = format!("{date_label} {time_label}");
    NaiveDateTime::parse_from_str(&combined, DATE_TIME_FORMAT)
        .map_err(|_| WalletFeedError::UnparseableDateTime(combined))
}

/// Sort key for a record: the parsed instant, or epoch zero when the
/// labels do not parse. Never used for display.
pub fn sort_instant(date_label: &str, time_label: &str) -> NaiveDateTime {
    to_instant(date_label, time_label).unwrap_or_else(|_| epoch())
}

pub fn parse_date_label(label: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(label, DATE_FORMAT)
        .map_err(|_| WalletFeedError::UnparseableDateTime(label.to_string()))
}

/// Display label for a date: the locale's today/yesterday literal when the
/// date matches, otherwise "Weekday, DD Month YYYY". Unparseable input is
/// returned unchanged.
pub fn to_relative_label(date_label: &str, today: NaiveDate, locale: &DisplayLocale) -> String {
    let parsed = match parse_date_label(date_label) {
        Ok(date) => date,
        Err(_) => return date_label.to_string(),
    };

    if parsed == today {
        return locale.today.to_string();
    }
    if today.checked_sub_days(Days::new(1)) == Some(parsed) {
        return locale.yesterday.to_string();
    }

    let weekday = locale.weekdays[parsed.weekday().num_days_from_monday() as usize];
    let month = locale.months[parsed.month0() as usize];
    format!("{}, {:02} {} {}", weekday, parsed.day(), month, parsed.year())
}
