//! Address book errors and their user-facing messages

use thiserror::Error;

/// Errors produced by the address book and its command handlers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Incorrect number of arguments: {got}, expected: {expected}")]
    ArgumentCount { expected: usize, got: usize },

    #[error("Contact '{0}' not found")]
    ContactNotFound(String),

    #[error("Contact '{name}' has no phone '{phone}'")]
    PhoneNotFound { name: String, phone: String },

    #[error("Contact '{name}' already has phone '{phone}'")]
    DuplicatePhone { name: String, phone: String },

    #[error("Invalid date '{0}', expected DD.MM.YYYY")]
    InvalidDate(String),
}

/// Categories of errors, each shown to the user as one fixed message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ArgumentCount,
    NameLookup,
    DuplicatePhone,
    InvalidDate,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::ArgumentCount => "Give me a correct number of arguments please",
            ErrorKind::NameLookup => "Give me a correct name please",
            ErrorKind::DuplicatePhone => "This contact already has that phone.",
            ErrorKind::InvalidDate => "Invalid date format. Use DD.MM.YYYY",
        }
    }
}

impl BookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            BookError::ContactNotFound(_) | BookError::PhoneNotFound { .. } => {
                ErrorKind::NameLookup
            }
            BookError::DuplicatePhone { .. } => ErrorKind::DuplicatePhone,
            BookError::InvalidDate(_) => ErrorKind::InvalidDate,
        }
    }

    /// The fixed message shown in the REPL, whatever the underlying cause
    pub fn user_message(&self) -> &'static str {
        self.kind().message()
    }
}

pub type Result<T> = std::result::Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_share_a_message() {
        let contact = BookError::ContactNotFound("dave".to_string());
        let phone = BookError::PhoneNotFound {
            name: "bob".to_string(),
            phone: "999".to_string(),
        };
        assert_eq!(contact.kind(), ErrorKind::NameLookup);
        assert_eq!(contact.user_message(), phone.user_message());
        assert_eq!(contact.user_message(), "Give me a correct name please");
    }

    #[test]
    fn test_argument_count_message() {
        let err = BookError::ArgumentCount { expected: 2, got: 1 };
        assert_eq!(err.user_message(), "Give me a correct number of arguments please");
        assert_eq!(err.to_string(), "Incorrect number of arguments: 1, expected: 2");
    }
}
