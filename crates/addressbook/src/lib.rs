//! addressbook - Contacts, phones and upcoming birthdays
//!
//! An interactive assistant that keeps an in-memory address book and
//! answers one command per line.
//!
//! Commands:
//! - add NAME PHONE: Add a contact, or another phone to an existing one
//! - change NAME OLD NEW: Replace a phone
//! - phone NAME: Show a contact's phones
//! - add-birthday NAME DD.MM.YYYY: Set a birthday (once)
//! - show-birthday NAME: Show a birthday
//! - birthdays: Congratulation dates inside the birthday window (default 7 days)
//! - all: Table of every contact

pub mod birthdays;
pub mod book;
pub mod command;
pub mod display;
pub mod error;
pub mod handlers;
pub mod record;
pub mod session;

pub use birthdays::UpcomingBirthday;
pub use book::AddressBook;
pub use command::Command;
pub use error::{BookError, ErrorKind};
pub use record::Record;
pub use session::Assistant;
