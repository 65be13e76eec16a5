use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError, parse_book_id};

pub struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Default)]
pub struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.remove_book(id).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::factory::create_book_repository;
    use crate::books::repository::BookRepository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::Repository;

    lazy_static! {
        static ref REPO : Arc<dyn BookRepository> = create_book_repository();
        static ref ADD_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), REPO.clone());
                AddBookCommand::new(svc)
            });
        static ref REMOVE_CMD : AsyncOnce<RemoveBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), REPO.clone());
                RemoveBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let add_cmd = ADD_CMD.get().await;
        let remove_cmd = REMOVE_CMD.get().await;

        let res = add_cmd.execute(AddBookCommandRequest::new("T", "A"))
            .await.expect("should add book");
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new(res.book.id.to_string())).await.expect("should remove book");
        assert!(REPO.get(res.book.id).await.is_err());

        let again = remove_cmd.execute(RemoveBookCommandRequest::new(res.book.id.to_string())).await;
        assert!(matches!(again, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_bad_book_id() {
        let remove_cmd = REMOVE_CMD.get().await;

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("1.5".to_string())).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
