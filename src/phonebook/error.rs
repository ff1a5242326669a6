use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PhonebookError {
    /// Domain errors are reported to the user and the session goes on.
    /// Anything else means the contacts file could not be read or written.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PhonebookError::InvalidInput(_)
                | PhonebookError::ContactNotFound(_)
                | PhonebookError::MissingArgument(_)
                | PhonebookError::UnknownCommand(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
