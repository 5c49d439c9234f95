//! Command handlers
//!
//! Each handler checks its argument count, reads or mutates the book and
//! returns the text to print. Errors are left for the caller to translate.

use chrono::NaiveDate;

use crate::book::AddressBook;
use crate::display;
use crate::error::{BookError, Result};
use crate::record::Record;

fn expect_args(args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(BookError::ArgumentCount {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// `add <name> <phone>`: create a contact or add a phone to an existing one
pub fn add_contact(args: &[String], book: &mut AddressBook) -> Result<String> {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);

    if book.contains(name) {
        let rec = book.get_mut(name)?;
        if !rec.add_phone(phone.as_str()) {
            return Err(BookError::DuplicatePhone {
                name: name.clone(),
                phone: phone.clone(),
            });
        }
        tracing::debug!(contact = %name, "phone added");
        return Ok("Phone added.".to_string());
    }

    let mut rec = Record::new(name.as_str());
    rec.add_phone(phone.as_str());
    book.add_record(rec);
    tracing::debug!(contact = %name, "contact added");
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: replace one phone with another
pub fn change_contact(args: &[String], book: &mut AddressBook) -> Result<String> {
    expect_args(args, 3)?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);

    book.get_mut(name)?.edit_phone(old, new)?;
    Ok(format!("Contact '{}' changed.", name))
}

/// `phone <name>`: comma-separated phones
pub fn show_phone(args: &[String], book: &AddressBook) -> Result<String> {
    expect_args(args, 1)?;
    let rec = book.get(&args[0])?;
    Ok(rec.phones().join(", "))
}

/// `add-birthday <name> <DD.MM.YYYY>`: set a birthday once
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<String> {
    expect_args(args, 2)?;
    let (name, date) = (&args[0], &args[1]);

    let rec = book.get_mut(name)?;
    if rec.birthday().is_some() {
        return Ok("Birthday already set.".to_string());
    }
    rec.add_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: the birthday, or nothing when unset
pub fn show_birthday(args: &[String], book: &AddressBook) -> Result<String> {
    expect_args(args, 1)?;
    Ok(book.get(&args[0])?.birthday_display())
}

/// `all`: every contact as a table
pub fn all_contacts(book: &AddressBook) -> String {
    display::contacts_table(book)
}

/// `birthdays`: congratulation dates inside the window starting at `reference`
pub fn birthdays(book: &AddressBook, window_days: u32, reference: NaiveDate) -> String {
    display::birthday_list(&book.upcoming_birthdays(window_days, reference))
}
