//! The in-memory address book

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::birthdays::{self, UpcomingBirthday};
use crate::error::{BookError, Result};
use crate::record::Record;

/// Contacts keyed by name, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record with the same name
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        if self.records.insert(name, record).is_some() {
            tracing::debug!("Replaced existing record");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate `(name, record)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> + '_ {
        self.records.iter().map(|(name, rec)| (name.as_str(), rec))
    }

    /// Contacts whose birthday falls within `window_days` of `reference`,
    /// ordered by congratulation date then name
    pub fn upcoming_birthdays(
        &self,
        window_days: u32,
        reference: NaiveDate,
    ) -> Vec<UpcomingBirthday> {
        let mut entries: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|rec| {
                let birthday = rec.birthday()?;
                birthdays::upcoming(rec.name(), birthday, window_days, reference)
            })
            .collect();

        birthdays::sort(&mut entries);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(name: &str, birthday: Option<&str>) -> Record {
        let mut rec = Record::new(name);
        rec.add_phone("000");
        if let Some(b) = birthday {
            rec.add_birthday(b).unwrap();
        }
        rec
    }

    #[test]
    fn test_lookup() {
        let mut book = AddressBook::new();
        book.add_record(contact("alice", None));

        assert!(book.contains("alice"));
        assert_eq!(book.get("alice").unwrap().name(), "alice");
        assert_eq!(
            book.get("dave").unwrap_err(),
            BookError::ContactNotFound("dave".to_string())
        );
    }

    #[test]
    fn test_iteration_keeps_insertion_order_and_restarts() {
        let mut book = AddressBook::new();
        for name in ["zoe", "adam", "mia"] {
            book.add_record(contact(name, None));
        }

        let first: Vec<&str> = book.iter().map(|(name, _)| name).collect();
        let second: Vec<&str> = book.iter().map(|(name, _)| name).collect();
        assert_eq!(first, ["zoe", "adam", "mia"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(contact("alice", None));
        let mut replacement = Record::new("alice");
        replacement.add_phone("999");
        book.add_record(replacement);

        assert_eq!(book.len(), 1);
        assert_eq!(book.get("alice").unwrap().phones(), ["999"]);
    }

    #[test]
    fn test_upcoming_birthdays() {
        let mut book = AddressBook::new();
        book.add_record(contact("no-birthday", None));
        book.add_record(contact("sunday", Some("25.10.1980")));
        book.add_record(contact("tuesday", Some("20.10.1995")));
        book.add_record(contact("far", Some("01.12.1990")));
        book.add_record(contact("monday", Some("26.10.2001")));
        book.add_record(contact("saturday", Some("24.10.1970")));

        let upcoming = book.upcoming_birthdays(7, date(2026, 10, 19));
        let summary: Vec<(&str, NaiveDate)> = upcoming
            .iter()
            .map(|e| (e.name.as_str(), e.congratulation_date))
            .collect();

        assert_eq!(
            summary,
            [
                ("tuesday", date(2026, 10, 20)),
                ("saturday", date(2026, 10, 26)),
                ("sunday", date(2026, 10, 26)),
            ]
        );
    }

    #[test]
    fn test_upcoming_birthdays_is_idempotent() {
        let mut book = AddressBook::new();
        book.add_record(contact("a", Some("21.10.1990")));
        book.add_record(contact("b", Some("24.10.1990")));

        let reference = date(2026, 10, 19);
        assert_eq!(
            book.upcoming_birthdays(7, reference),
            book.upcoming_birthdays(7, reference)
        );
    }

    #[test]
    fn test_upcoming_birthdays_across_year_end() {
        let mut book = AddressBook::new();
        book.add_record(contact("newyear", Some("01.01.2000")));

        let upcoming = book.upcoming_birthdays(7, date(2026, 12, 29));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].birthday, date(2027, 1, 1));
        assert_eq!(upcoming[0].congratulation_date, date(2027, 1, 1));
    }
}
