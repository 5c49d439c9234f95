//! Text rendering for contact tables and birthday lists

use assistant_core::format;

use crate::birthdays::UpcomingBirthday;
use crate::book::AddressBook;

const NAME_WIDTH: usize = 20;
const PHONE_WIDTH: usize = 10;
const BIRTHDAY_WIDTH: usize = 10;

/// Top border, column separators included
fn top_border() -> String {
    format!(
        "+={}=+={}=+={}=+",
        format::rule('=', NAME_WIDTH),
        format::rule('=', PHONE_WIDTH),
        format::rule('=', BIRTHDAY_WIDTH)
    )
}

/// Border under the header and at the bottom
fn rule_border() -> String {
    format!(
        "+={}==={}==={}=+",
        format::rule('=', NAME_WIDTH),
        format::rule('=', PHONE_WIDTH),
        format::rule('=', BIRTHDAY_WIDTH)
    )
}

fn row(name: &str, phone: &str, birthday: &str) -> String {
    format!(
        "| {:nw$} | {:pw$} | {:bw$} |",
        name,
        phone,
        birthday,
        nw = NAME_WIDTH,
        pw = PHONE_WIDTH,
        bw = BIRTHDAY_WIDTH
    )
}

/// Render every contact as a fixed-width table.
///
/// Extra phones go on their own rows; an empty book gets a single "None" row.
pub fn contacts_table(book: &AddressBook) -> String {
    let mut lines = vec![
        top_border(),
        row("Username", "Phone(s)", "Birthday"),
        rule_border(),
    ];

    if book.is_empty() {
        lines.push(format!(
            "| {:nw$}   {:pw$}   {:bw$} |",
            "None",
            "",
            "",
            nw = NAME_WIDTH,
            pw = PHONE_WIDTH,
            bw = BIRTHDAY_WIDTH
        ));
    }

    for (name, rec) in book.iter() {
        let mut phones = rec.phones().iter();
        let first = phones.next().map(String::as_str).unwrap_or("");
        lines.push(row(name, first, &rec.birthday_display()));
        for phone in phones {
            lines.push(row("", phone, ""));
        }
    }

    lines.push(rule_border());
    lines.join("\n")
}

/// One `<name> - <DD.MM.YYYY>` line per entry
pub fn birthday_list(entries: &[UpcomingBirthday]) -> String {
    if entries.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    entries
        .iter()
        .map(|e| format!("{} - {}", e.name, format::date(e.congratulation_date)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table() {
        let table = contacts_table(&AddressBook::new());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        let top = format!(
            "+={}=+={}=+={}=+",
            "=".repeat(20),
            "=".repeat(10),
            "=".repeat(10)
        );
        assert_eq!(lines[0], top);
        assert_eq!(lines[1], "| Username             | Phone(s)   | Birthday   |");
        let none_row = format!(
            "| None{}   {}   {} |",
            " ".repeat(16),
            " ".repeat(10),
            " ".repeat(10)
        );
        assert_eq!(lines[3], none_row);
        assert_eq!(lines[2], lines[4]);
    }

    #[test]
    fn test_table_rows() {
        let mut book = AddressBook::new();
        let mut alice = Record::new("alice");
        alice.add_phone("123");
        alice.add_phone("456");
        alice.add_birthday("15.06.1990").unwrap();
        book.add_record(alice);

        let table = contacts_table(&book);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], "| alice                | 123        | 15.06.1990 |");
        assert_eq!(lines[4], "|                      | 456        |            |");
        // Every row has the same width
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_birthday_list() {
        let date = |d| NaiveDate::from_ymd_opt(2026, 10, d).unwrap();
        let entries = vec![
            UpcomingBirthday {
                name: "bob".to_string(),
                birthday: date(20),
                congratulation_date: date(20),
            },
            UpcomingBirthday {
                name: "amy".to_string(),
                birthday: date(24),
                congratulation_date: date(26),
            },
        ];

        assert_eq!(birthday_list(&entries), "bob - 20.10.2026\namy - 26.10.2026");
        assert_eq!(birthday_list(&[]), "No upcoming birthdays.");
    }
}
