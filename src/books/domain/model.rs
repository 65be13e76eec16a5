use serde::{Deserialize, Serialize};
use crate::books::dto::BookDraft;
use crate::core::domain::Identifiable;

// BookEntity is the record kept by the registry; its book_id always equals the key it is
// stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: u64,
    pub title: String,
    pub author: String,
}

impl BookEntity {
    pub fn new(book_id: u64, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn from_draft(book_id: u64, draft: &BookDraft) -> Self {
        Self::new(book_id, draft.title.as_str(), draft.author.as_str())
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> u64 {
        self.book_id
    }
}
