//! A single contact: name, phones and an optional birthday

use chrono::NaiveDate;

use crate::error::{BookError, Result};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<String>,
    birthday: Option<NaiveDate>,
}

impl Record {
    /// Create a contact with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phones in the order they were added
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    /// Whether the phone is already on this contact
    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p == phone)
    }

    /// Look up a phone by value.
    ///
    /// Model-level query; no command exposes it.
    pub fn find_phone(&self, phone: &str) -> Option<&str> {
        self.phones.iter().find(|p| *p == phone).map(String::as_str)
    }

    /// Append a phone unless it is already present.
    ///
    /// Returns whether the phone was added.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> bool {
        let phone = phone.into();
        if self.has_phone(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    /// Replace `old` with `new` in place
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| self.phone_not_found(old))?;

        if old != new && self.has_phone(new) {
            return Err(BookError::DuplicatePhone {
                name: self.name.clone(),
                phone: new.to_string(),
            });
        }

        self.phones[index] = new.to_string();
        Ok(())
    }

    /// Remove a phone, failing with `PhoneNotFound` when it is absent.
    ///
    /// Model-level operation; no command exposes it.
    pub fn remove_phone(&mut self, phone: &str) -> Result<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| self.phone_not_found(phone))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Parse a DD.MM.YYYY date and set it as the birthday.
    ///
    /// Overwrites any existing birthday; the set-once rule belongs to the caller.
    pub fn add_birthday(&mut self, text: &str) -> Result<()> {
        let date = assistant_core::format::parse_date(text)
            .ok_or_else(|| BookError::InvalidDate(text.to_string()))?;
        self.birthday = Some(date);
        Ok(())
    }

    /// Birthday as DD.MM.YYYY, or empty when unset
    pub fn birthday_display(&self) -> String {
        self.birthday
            .map(assistant_core::format::date)
            .unwrap_or_default()
    }

    fn phone_not_found(&self, phone: &str) -> BookError {
        BookError::PhoneNotFound {
            name: self.name.clone(),
            phone: phone.to_string(),
        }
    }
}
