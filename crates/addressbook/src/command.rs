//! Command vocabulary and input tokenizing

/// Commands understood by the assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    /// Anything else, kept as typed
    Unknown(String),
}

impl Command {
    /// Match a command token, case-insensitively
    pub fn parse(token: &str) -> Self {
        let token = token.trim().to_lowercase();
        match token.as_str() {
            "hello" => Command::Hello,
            "help" => Command::Help,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown(token),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
            Command::Unknown(token) => token,
        }
    }
}

/// A tokenized input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line on whitespace into a command and its arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<Input> {
    let mut tokens = line.split_whitespace();
    let command = Command::parse(tokens.next()?);
    let args = tokens.map(str::to_string).collect();
    Some(Input { command, args })
}
