use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is the wire shape of a stored book: {"id", "title", "author"}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: u64,
    pub title: String,
    pub author: String,
}

impl BookDto {
    pub fn new(id: u64, title: &str, author: &str) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> u64 {
        self.id
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}

// BookDraft carries the client supplied fields of a create or update. Missing fields
// decode as empty strings. A client id must still be an integer, but the registry never
// reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookDraft {
    #[serde(skip_serializing)]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
}

impl BookDraft {
    pub fn new(title: &str, author: &str) -> BookDraft {
        BookDraft {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}
