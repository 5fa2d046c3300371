#[cfg(test)]
mod repository_tests {
    use chrono::{Duration, Local};
    use uuid::Uuid;

    use crate::models::Item;
    use crate::repositories::item_repository::*;

    fn create_test_item(name: &str, days_until_expiry: i64, quantity: u32) -> Item {
        Item::new(
            name.to_string(),
            Local::now().date_naive() + Duration::days(days_until_expiry),
            "kg".to_string(),
            quantity,
        )
    }

    #[test]
    fn test_put_and_get() {
        let repo = InMemoryItemRepository::new();
        let item = create_test_item("Garlic", 30, 5);
        let id = item.id;

        repo.put(item.clone()).unwrap();

        let found = repo.get(id).unwrap();
        assert_eq!(found, Some(item));
    }

    #[test]
    fn test_get_absent_id_yields_none() {
        let repo = InMemoryItemRepository::new();

        let found = repo.get(Uuid::new_v4()).unwrap();

        assert!(found.is_none());
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let repo = InMemoryItemRepository::new();
        let mut item = create_test_item("Rice", 365, 50);
        let id = item.id;
        repo.put(item.clone()).unwrap();

        item.quantity = 30;
        repo.put(item).unwrap();

        let found = repo.get(id).unwrap().unwrap();
        assert_eq!(found.quantity, 30);
        assert_eq!(repo.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_list_all_returns_snapshot() {
        let repo = InMemoryItemRepository::new();
        repo.put(create_test_item("Garlic", 30, 5)).unwrap();
        repo.put(create_test_item("Rice", 365, 50)).unwrap();

        let mut listed = repo.list_all().unwrap();
        assert_eq!(listed.len(), 2);

        // Mutating the snapshot must not affect internal state
        listed.clear();
        assert_eq!(repo.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_mutating_snapshot_items_does_not_leak_back() {
        let repo = InMemoryItemRepository::new();
        let item = create_test_item("Parmesan", 60, 5);
        let id = item.id;
        repo.put(item).unwrap();

        let mut listed = repo.list_all().unwrap();
        listed[0].quantity = 0;

        assert_eq!(repo.get(id).unwrap().unwrap().quantity, 5);
    }

    #[test]
    fn test_remove_expired_keeps_today_and_future() {
        let repo = InMemoryItemRepository::new();
        let expired = create_test_item("Old milk", -1, 3);
        let expires_today = create_test_item("Yogurt", 0, 4);
        let fresh = create_test_item("Tomatoes", 5, 20);
        let expired_id = expired.id;
        let today_id = expires_today.id;
        let fresh_id = fresh.id;

        repo.put(expired).unwrap();
        repo.put(expires_today).unwrap();
        repo.put(fresh).unwrap();

        repo.remove_expired().unwrap();

        assert!(repo.get(expired_id).unwrap().is_none());
        assert!(repo.get(today_id).unwrap().is_some());
        assert!(repo.get(fresh_id).unwrap().is_some());
    }

    #[test]
    fn test_remove_expired_on_empty_store() {
        let repo = InMemoryItemRepository::new();

        repo.remove_expired().unwrap();

        assert!(repo.list_all().unwrap().is_empty());
    }
}
