//! Interactive session
//!
//! Reads one command per line, dispatches it against the owned address
//! book and prints the reply. Ends on `close`/`exit` or end of input.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use assistant_core::{format, Config};

use crate::book::AddressBook;
use crate::command::{parse_input, Command, Input};
use crate::handlers;

const BANNER_WIDTH: usize = 40;

pub const HELP: &str = "\
Available commands:
* hello - Greets you back
* add <username> <phone> - Adds new user, or new phone to the user
* change <username> <old_phone> <new_phone> - Change user's phone
* phone <username> - Get phones by username
* add-birthday <username> <DD.MM.YYYY> - Adds birthday to a user
* show-birthday <username> - Shows user's birthday
* birthdays - Shows upcoming birthdays
* all - Print all users
* help - Show this list
* close, exit - Exits the bot";

/// Welcome text printed when the session starts
pub fn welcome() -> String {
    format!(
        "{}\n\n{}\n",
        format::banner("Welcome to the assistant bot!", BANNER_WIDTH),
        HELP
    )
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep going
    Continue(String),
    /// Print the farewell and stop
    Exit(String),
}

/// The read-evaluate-print loop, owning the address book
pub struct Assistant {
    book: AddressBook,
    config: Config,
    today: Option<NaiveDate>,
}

impl Assistant {
    pub fn new(config: Config) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            today: None,
        }
    }

    /// Pin the reference date used by `birthdays` instead of the local date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Evaluate one parsed command
    pub fn dispatch(&mut self, input: Input) -> Reply {
        let Input { command, args } = input;
        debug!(command = command.as_str(), args = args.len(), "dispatch");

        let result = match command {
            Command::Exit => return Reply::Exit("Good bye!".to_string()),
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Help => Ok(HELP.to_string()),
            Command::Add => handlers::add_contact(&args, &mut self.book),
            Command::Change => handlers::change_contact(&args, &mut self.book),
            Command::Phone => handlers::show_phone(&args, &self.book),
            Command::All => Ok(handlers::all_contacts(&self.book)),
            Command::AddBirthday => handlers::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(&args, &self.book),
            Command::Birthdays => Ok(handlers::birthdays(
                &self.book,
                self.config.birthday_window_days,
                self.today(),
            )),
            Command::Unknown(token) => {
                debug!(command = %token, "unknown command");
                Ok("Invalid command.".to_string())
            }
        };

        match result {
            Ok(text) => Reply::Continue(text),
            Err(e) => {
                debug!(error = %e, "command failed");
                Reply::Continue(e.user_message().to_string())
            }
        }
    }

    /// Evaluate a raw input line; blank lines produce no reply
    pub fn eval_line(&mut self, line: &str) -> Option<Reply> {
        parse_input(line).map(|input| self.dispatch(input))
    }

    /// Run until exit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> Result<()> {
        info!("Session started");

        if self.config.show_banner {
            writeln!(writer, "{}", welcome()).context("Failed to write banner")?;
        }

        let mut buf = Vec::new();
        loop {
            write!(writer, "{}", self.config.prompt).context("Failed to write prompt")?;
            writer.flush().context("Failed to flush output")?;

            buf.clear();
            let bytes_read = reader
                .read_until(b'\n', &mut buf)
                .context("Failed to read input")?;

            if bytes_read == 0 {
                info!("End of input");
                writeln!(writer)?;
                writeln!(writer, "Good bye!")?;
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "input line is not valid UTF-8");
                    writeln!(writer, "Invalid command.")?;
                    continue;
                }
            };

            match self.eval_line(line) {
                None => continue,
                Some(Reply::Continue(text)) => writeln!(writer, "{}", text)?,
                Some(Reply::Exit(text)) => {
                    writeln!(writer, "{}", text)?;
                    break;
                }
            }
        }

        writer.flush()?;
        info!(contacts = self.book.len(), "Session ended");
        Ok(())
    }
}
