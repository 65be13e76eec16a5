use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// book_id is the already parsed path id; an id inside the body never reaches this request.
#[derive(Debug)]
pub struct UpdateBookCommandRequest {
    pub book_id: u64,
    pub title: String,
    pub author: String,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: u64, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
    pub fn from_draft(book_id: u64, draft: BookDraft) -> Self {
        Self {
            book_id,
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
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id, &req.build_draft()).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
