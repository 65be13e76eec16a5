pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDraft, BookDto};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, draft: &BookDraft) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: u64) -> LibraryResult<()>;
    async fn update_book(&self, id: u64, draft: &BookDraft) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: u64) -> LibraryResult<BookDto>;
    async fn find_books(&self) -> LibraryResult<Vec<BookDto>>;
}

