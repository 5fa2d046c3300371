use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use larder_rs::models::Item;
use larder_rs::repositories::InMemoryItemRepository;
use larder_rs::services::InventoryService;

/// Build a service over a fresh in-memory repository
pub fn build_service() -> InventoryService {
    InventoryService::new(Arc::new(InMemoryItemRepository::new()))
}

/// A calendar date the given number of days from today (negative for past)
pub fn days_from_today(days: i64) -> NaiveDate {
    Local::now().date_naive() + Duration::days(days)
}

/// Add an item expiring `days` from today and return the stored record
pub fn add_item(
    service: &InventoryService,
    name: &str,
    days: i64,
    unit: &str,
    quantity: u32,
) -> Item {
    service
        .add_item(
            name.to_string(),
            days_from_today(days),
            unit.to_string(),
            quantity,
        )
        .expect("failed to add item")
}
