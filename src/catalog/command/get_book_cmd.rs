use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError, parse_book_id};

pub struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.find_book_by_id(id)
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
