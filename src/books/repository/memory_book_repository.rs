use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDraft;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

const FIRST_BOOK_ID: u64 = 1;

#[derive(Debug)]
struct BookTable {
    books: HashMap<u64, BookEntity>,
    // never decremented, ids of deleted books are not handed out again
    next_id: u64,
}

// MemoryBookRepository keeps books in process memory. A single mutex guards both the map
// and the id counter, and every operation holds it for its whole body without awaiting.
#[derive(Debug)]
pub struct MemoryBookRepository {
    table: Mutex<BookTable>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            table: Mutex::new(BookTable {
                books: HashMap::new(),
                next_id: FIRST_BOOK_ID,
            }),
        }
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BookEntity, BookDraft> for MemoryBookRepository {
    async fn create(&self, draft: &BookDraft) -> LibraryResult<BookEntity> {
        let mut table = self.table.lock()?;
        let book = BookEntity::from_draft(table.next_id, draft);
        table.next_id += 1;
        table.books.insert(book.book_id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: u64, draft: &BookDraft) -> LibraryResult<BookEntity> {
        let mut table = self.table.lock()?;
        let existing = table.books.get_mut(&id)
            .ok_or_else(|| LibraryError::not_found("Book not found"))?;
        *existing = BookEntity::from_draft(id, draft);
        Ok(existing.clone())
    }

    async fn get(&self, id: u64) -> LibraryResult<BookEntity> {
        let table = self.table.lock()?;
        table.books.get(&id).cloned()
            .ok_or_else(|| LibraryError::not_found("Book not found"))
    }

    async fn delete(&self, id: u64) -> LibraryResult<usize> {
        let mut table = self.table.lock()?;
        table.books.remove(&id)
            .map(|_| 1)
            .ok_or_else(|| LibraryError::not_found("Book not found"))
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        let table = self.table.lock()?;
        Ok(table.books.values().cloned().collect())
    }
}

impl BookRepository for MemoryBookRepository {}
