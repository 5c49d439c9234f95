//! assistant - Interactive address book
//!
//! Usage:
//!   assistant                     Start the interactive session
//!   assistant --window-days 14    Look two weeks ahead for birthdays
//!   assistant --config PATH       Use an alternate config file
//!   assistant --no-banner         Skip the welcome banner

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use assistant_core::{Config, Paths};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use addressbook::Assistant;

/// Assistant - Interactive address book with birthday reminders
#[derive(Parser, Debug)]
#[command(name = "assistant")]
#[command(about = "Interactive address book with phones and upcoming birthdays")]
#[command(version)]
#[command(after_help = r#"COMMANDS (inside the session):
    add <username> <phone>                  Add a user, or a phone to a user
    change <username> <old> <new>           Change a user's phone
    phone <username>                        Show a user's phones
    add-birthday <username> <DD.MM.YYYY>    Set a user's birthday
    show-birthday <username>                Show a user's birthday
    birthdays                               Upcoming birthdays
    all                                     Table of all users
    close, exit                             Leave

CONFIG:
    ~/.config/assistant/config.json
    { "birthday_window_days": 7, "prompt": "Enter a command: ", "show_banner": true }
"#)]
struct Cli {
    /// Days ahead to look for birthdays (overrides config)
    #[arg(long, value_name = "DAYS")]
    window_days: Option<u32>,

    /// Config file to use instead of the default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Don't print the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "assistant=debug,addressbook=debug,assistant_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(|| Paths::new().config_file());
    let mut config = Config::load(&config_path)?;

    if let Some(days) = cli.window_days {
        config.birthday_window_days = days;
    }
    if cli.no_banner {
        config.show_banner = false;
    }
    tracing::debug!("Config: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Assistant::new(config).run(stdin.lock(), stdout.lock())
}
