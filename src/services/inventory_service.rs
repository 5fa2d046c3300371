use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::models::{Item, ServiceError, ServiceResult};
use crate::repositories::ItemRepository;

/// Service for managing perishable inventory
pub struct InventoryService {
    repository: Arc<dyn ItemRepository>,
}

impl InventoryService {
    /// Create a new InventoryService
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    /// Fetch an item or fail with `ItemNotFound`
    fn get_item_or_fail(&self, id: Uuid) -> ServiceResult<Item> {
        match self.repository.get(id)? {
            Some(item) => Ok(item),
            None => {
                warn!("Item not found");
                Err(ServiceError::ItemNotFound { id })
            }
        }
    }

    /// Add a new inventory item and return the created record
    #[instrument(skip(self), fields(name = %name))]
    pub fn add_item(
        &self,
        name: String,
        expiration_date: NaiveDate,
        unit_of_measure: String,
        quantity: u32,
    ) -> ServiceResult<Item> {
        info!("Adding inventory item");

        let item = Item::new(name, expiration_date, unit_of_measure, quantity);
        self.repository.put(item.clone())?;

        info!("Item added with id {}", item.id);
        Ok(item)
    }

    /// Consume a quantity of an item and return the updated record
    ///
    /// Fails with `ItemNotFound` for an unknown id and with
    /// `InsufficientQuantity` when the stored quantity is not strictly
    /// greater than the requested amount; a failed call leaves the
    /// stored quantity unchanged.
    #[instrument(skip(self), fields(id = %id, quantity = quantity))]
    pub fn use_item(&self, id: Uuid, quantity: u32) -> ServiceResult<Item> {
        info!("Consuming stock");

        let mut item = self.get_item_or_fail(id)?;
        item.decrement_quantity(quantity)?;
        self.repository.put(item.clone())?;

        info!("Stock consumed, {} remaining", item.quantity);
        Ok(item)
    }

    /// Remove every expired item from the store
    #[instrument(skip(self))]
    pub fn remove_expired_items(&self) -> ServiceResult<()> {
        info!("Sweeping expired items");

        self.repository.remove_expired()?;
        Ok(())
    }

    /// Set an item's quantity to a new value via increment/decrement
    ///
    /// A downward correction is subject to the same insufficient-quantity
    /// rule as `use_item`; setting the quantity to its current value is a
    /// no-op.
    #[instrument(skip(self), fields(id = %id, new_quantity = new_quantity))]
    pub fn perform_inventory_correction(
        &self,
        id: Uuid,
        new_quantity: u32,
    ) -> ServiceResult<Item> {
        info!("Correcting stock level");

        let mut item = self.get_item_or_fail(id)?;
        let delta = i64::from(new_quantity) - i64::from(item.quantity);
        if delta > 0 {
            item.increment_quantity(delta as u32);
        } else if delta < 0 {
            item.decrement_quantity((-delta) as u32)?;
        } else {
            return Ok(item);
        }
        self.repository.put(item.clone())?;

        info!("Stock corrected to {}", item.quantity);
        Ok(item)
    }

    /// List every item currently in the store
    #[instrument(skip(self))]
    pub fn list_all(&self) -> ServiceResult<Vec<Item>> {
        let items = self.repository.list_all()?;

        info!("Listed {} items", items.len());
        Ok(items)
    }

    /// List items whose quantity is at or below the given threshold
    #[instrument(skip(self), fields(threshold = threshold))]
    pub fn list_critical(&self, threshold: u32) -> ServiceResult<Vec<Item>> {
        let critical: Vec<Item> = self
            .repository
            .list_all()?
            .into_iter()
            .filter(|item| item.quantity <= threshold)
            .collect();

        info!("Found {} items at or below threshold", critical.len());
        Ok(critical)
    }

    /// Look up an item by id; absence is not an error
    #[instrument(skip(self), fields(id = %id))]
    pub fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<Item>> {
        Ok(self.repository.get(id)?)
    }
}
