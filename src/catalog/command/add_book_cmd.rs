use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Built from a decoded BookDraft; the registry picks the id.
#[derive(Debug, Default)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
    pub fn from_draft(draft: BookDraft) -> Self {
        Self {
            title: draft.title,
            author: draft.author,
        }
    }
    pub fn build_draft(&self) -> BookDraft {
        BookDraft::new(self.title.as_str(), self.author.as_str())
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.build_draft()).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
