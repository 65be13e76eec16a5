use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Identifiable;

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

// Serializes as a bare JSON array, `[]` when the catalog is empty.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(mut books: Vec<BookDto>) -> Self {
        books.sort_by_key(|b| b.id());
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.find_books()
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_list_empty_catalog() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), create_book_repository());
        let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new())
            .await.expect("should list books");
        assert!(res.books.is_empty());
        assert_eq!("[]", serde_json::to_string(&res).expect("should serialize"));
    }

    #[tokio::test]
    async fn test_should_run_list_books() {
        let config = Configuration::new("test");
        let repo = create_book_repository();
        let add_cmd = AddBookCommand::new(factory::create_catalog_service(&config, repo.clone()));
        let list_cmd = ListBooksCommand::new(factory::create_catalog_service(&config, repo));

        for title in ["c", "a", "b"] {
            let _ = add_cmd.execute(AddBookCommandRequest::new(title, "someone")).await.expect("should add book");
        }
        let res = list_cmd.execute(ListBooksCommandRequest::new()).await.expect("should list books");
        let ids: Vec<u64> = res.books.iter().map(|b| b.id).collect();
        assert_eq!(vec![1, 2, 3], ids);
    }
}
