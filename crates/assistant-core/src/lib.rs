//! Assistant Core - Shared functionality for the assistant bot
//!
//! Standard paths, the optional configuration file and the small set of
//! text formatting rules every command output agrees on.

pub mod config;
pub mod format;
pub mod paths;

pub use config::Config;
pub use paths::Paths;
