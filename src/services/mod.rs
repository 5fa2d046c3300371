// Services module - business logic layer

pub mod inventory_service;

pub use inventory_service::InventoryService;
