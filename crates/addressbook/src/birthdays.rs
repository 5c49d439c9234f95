//! Upcoming birthday calculation
//!
//! A birthday is "upcoming" when its next occurrence falls inside
//! `[reference, reference + window)`. Occurrences on a weekend are
//! congratulated on the following Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A contact whose birthday falls inside the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The actual next occurrence of the birthday
    pub birthday: NaiveDate,
    /// The weekend-adjusted day to send congratulations
    pub congratulation_date: NaiveDate,
}

/// The birthday's month/day in the given year.
///
/// Feb 29 falls back to Mar 1 when `year` is not a leap year. A year outside
/// chrono's range maps to `NaiveDate::MAX`, which no window can reach.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Next occurrence of the birthday on or after `reference`
pub fn next_occurrence(birthday: NaiveDate, reference: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, reference.year());
    if this_year >= reference {
        this_year
    } else {
        occurrence_in_year(birthday, reference.year() + 1)
    }
}

/// Shift Saturday and Sunday to the next Monday
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

/// Check a single birthday against the window
pub fn upcoming(
    name: &str,
    birthday: NaiveDate,
    window_days: u32,
    reference: NaiveDate,
) -> Option<UpcomingBirthday> {
    let next = next_occurrence(birthday, reference);
    let days_until = (next - reference).num_days();
    if days_until >= i64::from(window_days) {
        return None;
    }

    Some(UpcomingBirthday {
        name: name.to_string(),
        birthday: next,
        congratulation_date: congratulation_date(next),
    })
}

/// Order by congratulation date, then by name
pub fn sort(entries: &mut [UpcomingBirthday]) {
    entries.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });
}
