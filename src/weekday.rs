//! Folding of calendar dates onto the five working-day columns.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Working-day columns of the calendar grid, left to right.
pub const WORKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Saturday folds onto Friday and Sunday onto Monday; other days are unchanged.
pub fn normalize(day: Weekday) -> Weekday {
    match day {
        Weekday::Sat => Weekday::Fri,
        Weekday::Sun => Weekday::Mon,
        other => other,
    }
}

/// Name-based variant of [`normalize`]. Accepts full or abbreviated English
/// weekday names in any case; returns `None` for anything else.
pub fn normalize_name(name: &str) -> Option<&'static str> {
    let day = name.trim().parse::<Weekday>().ok()?;
    Some(weekday_name(normalize(day)))
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Column index (0 = Monday .. 4 = Friday) of a date after weekend folding.
pub fn workday_index(date: NaiveDate) -> usize {
    normalize(date.weekday()).num_days_from_monday() as usize
}

/// The Monday on or before `date`.
pub fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
