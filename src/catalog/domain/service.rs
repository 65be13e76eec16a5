use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::dto::{BookDraft, BookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, draft: &BookDraft) -> LibraryResult<BookDto> {
        let book = self.book_repository.create(draft).await?;
        info!(branch = %self.branch_id, book_id = book.book_id, "added book");
        Ok(BookDto::from(&book))
    }

    async fn remove_book(&self, id: u64) -> LibraryResult<()> {
        let _ = self.book_repository.delete(id).await?;
        info!(branch = %self.branch_id, book_id = id, "removed book");
        Ok(())
    }

    async fn update_book(&self, id: u64, draft: &BookDraft) -> LibraryResult<BookDto> {
        let book = self.book_repository.update(id, draft).await?;
        info!(branch = %self.branch_id, book_id = id, "updated book");
        Ok(BookDto::from(&book))
    }

    async fn find_book_by_id(&self, id: u64) -> LibraryResult<BookDto> {
        debug!(branch = %self.branch_id, book_id = id, "finding book");
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.list().await?;
        debug!(branch = %self.branch_id, count = res.len(), "listing books");
        Ok(res.iter().map(BookDto::from).collect())
    }
}


#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDraft;
    use crate::books::factory::create_book_repository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test"), create_book_repository())
            });
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = SUT_SVC.get().await;

        let book = catalog_svc.add_book(&BookDraft::new("test book", "someone")).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_id(book.id).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = SUT_SVC.get().await;

        let book = catalog_svc.add_book(&BookDraft::new("test book", "someone")).await.expect("should add book");
        let updated = catalog_svc.update_book(book.id, &BookDraft::new("new title", "someone else"))
            .await.expect("should update book");
        assert_eq!(book.id, updated.id);

        let loaded = catalog_svc.find_book_by_id(book.id).await.expect("should return book");
        assert_eq!("new title", loaded.title);
        assert_eq!("someone else", loaded.author);
    }

    #[tokio::test]
    async fn test_should_find_books() {
        let catalog_svc = SUT_SVC.get().await;

        let book = catalog_svc.add_book(&BookDraft::new("listed", "someone")).await.expect("should add book");
        let res = catalog_svc.find_books().await.expect("should return books");
        assert!(res.contains(&book));
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = SUT_SVC.get().await;

        let book = catalog_svc.add_book(&BookDraft::new("test book", "someone")).await.expect("should add book");

        let _ = catalog_svc.remove_book(book.id).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_id(book.id).await;
        assert!(matches!(loaded, Err(LibraryError::NotFound { .. })));
    }
}
