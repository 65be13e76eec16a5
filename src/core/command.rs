use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

// Path segments are ids only when they are plain non-negative integers.
pub(crate) fn parse_book_id(book_id: &str) -> Result<u64, CommandError> {
    book_id.parse::<u64>()
        .map_err(|err| LibraryError::validation("Invalid book ID", Some(err.to_string())))
        .map_err(CommandError::from)
}
