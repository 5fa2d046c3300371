use std::collections::HashMap;

use chrono::Local;
use parking_lot::Mutex;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::models::{Item, RepositoryResult};

/// Trait defining the interface for inventory data access operations
pub trait ItemRepository: Send + Sync {
    /// Insert an item, overwriting any existing entry with the same id
    fn put(&self, item: Item) -> RepositoryResult<()>;

    /// Point lookup by id; an absent id yields `Ok(None)`, never an error
    fn get(&self, id: Uuid) -> RepositoryResult<Option<Item>>;

    /// Return a snapshot of every stored item, in no particular order
    fn list_all(&self) -> RepositoryResult<Vec<Item>>;

    /// Delete every item whose expiration date has passed, evaluated
    /// against the current date at call time
    fn remove_expired(&self) -> RepositoryResult<()>;
}

/// In-memory implementation of the ItemRepository trait
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Mutex<HashMap<Uuid, Item>>,
}

impl InMemoryItemRepository {
    /// Create an empty in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self, item), fields(id = %item.id))]
    fn put(&self, item: Item) -> RepositoryResult<()> {
        self.items.lock().insert(item.id, item);
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    fn get(&self, id: Uuid) -> RepositoryResult<Option<Item>> {
        Ok(self.items.lock().get(&id).cloned())
    }

    #[instrument(skip(self))]
    fn list_all(&self) -> RepositoryResult<Vec<Item>> {
        Ok(self.items.lock().values().cloned().collect())
    }

    #[instrument(skip(self))]
    fn remove_expired(&self) -> RepositoryResult<()> {
        let today = Local::now().date_naive();
        let mut items = self.items.lock();
        let before = items.len();
        items.retain(|_, item| !item.is_expired_on(today));
        debug!("Removed {} expired items", before - items.len());
        Ok(())
    }
}
