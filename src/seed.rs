use chrono::{Duration, Local};
use tracing::info;

use crate::models::ServiceResult;
use crate::services::InventoryService;

/// Seed the starting stock for the demo restaurant
///
/// Invoked once at process start when enabled in configuration; takes
/// the service explicitly so no hidden global state is involved.
pub fn seed_demo_inventory(service: &InventoryService) -> ServiceResult<()> {
    let today = Local::now().date_naive();

    let stock = [
        ("Olive oil", 180, "L", 20),
        ("Garlic", 30, "kg", 5),
        ("Tomatoes", 5, "kg", 20),
        ("Romaine lettuce", 4, "pcs", 15),
        ("Chicken breast", 7, "kg", 25),
        ("Rice", 365, "kg", 50),
        ("Parmesan", 60, "kg", 5),
    ];

    for (name, days_until_expiry, unit, quantity) in stock {
        service.add_item(
            name.to_string(),
            today + Duration::days(days_until_expiry),
            unit.to_string(),
            quantity,
        )?;
    }

    info!("Seeded {} demo items", stock.len());
    Ok(())
}
