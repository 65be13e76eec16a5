use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Repository owns identity: callers hand over a draft without an id and get back the
// stored entity carrying the id that was assigned to it.
#[async_trait]
pub trait Repository<Entity, Draft>: Sync + Send {
    // create an entity from a draft, assigning it the next id
    async fn create(&self, draft: &Draft) -> LibraryResult<Entity>;

    // replaces every field of an existing entity, keeping its id
    async fn update(&self, id: u64, draft: &Draft) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: u64) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: u64) -> LibraryResult<usize>;

    // all entities, in no particular order
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}
