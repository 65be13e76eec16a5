use std::sync::Arc;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use tracing::warn;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub books: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(config: Configuration, books: Arc<dyn BookRepository>) -> AppState {
        AppState {
            config,
            books,
        }
    }
}

pub type ServerError = (StatusCode, String);

// Bodies are decoded regardless of Content-Type; a literal `null` yields the default value.
pub fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ServerError> {
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(LibraryError::from)
        .map_err(CommandError::from)
        .map_err(ServerError::from)
}

pub async fn method_not_allowed() -> ServerError {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
}

pub async fn not_found() -> ServerError {
    (StatusCode::NOT_FOUND, "Not found".to_string())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { message } => {
                (StatusCode::NOT_FOUND, message)
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { message } => {
                warn!("rejecting undecodable body: {}", message);
                (StatusCode::BAD_REQUEST, "Invalid input".to_string())
            }
            CommandError::Validation { message, .. } => {
                warn!("rejecting request: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
        }
    }
}
