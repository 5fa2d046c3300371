use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ServiceError, ServiceResult};

/// Core inventory item model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub expiration_date: NaiveDate,
    pub unit_of_measure: String,
    pub quantity: u32,
}

impl Item {
    /// Create a new Item with a generated id
    pub fn new(
        name: String,
        expiration_date: NaiveDate,
        unit_of_measure: String,
        quantity: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            expiration_date,
            unit_of_measure,
            quantity,
        }
    }

    /// Raise the stored quantity by the given amount
    pub fn increment_quantity(&mut self, amount: u32) {
        self.quantity += amount;
    }

    /// Lower the stored quantity by the given amount
    ///
    /// Succeeds only while the current quantity is strictly greater than
    /// the amount; draining an item to exactly zero is rejected.
    pub fn decrement_quantity(&mut self, amount: u32) -> ServiceResult<()> {
        if self.quantity > amount {
            self.quantity -= amount;
            Ok(())
        } else {
            Err(ServiceError::InsufficientQuantity {
                requested: amount,
                available: self.quantity,
            })
        }
    }

    /// Check whether the item has passed its expiration date
    ///
    /// Expiry is computed on read against the current local calendar
    /// date, never stored.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Local::now().date_naive())
    }

    /// Check expiry against an explicit calendar date
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.expiration_date < date
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | expires {} | {} {}",
            self.id, self.name, self.expiration_date, self.quantity, self.unit_of_measure
        )
    }
}
