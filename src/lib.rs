pub mod config;
pub mod console;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod seed;
pub mod services;

pub use crate::config::{Config, ConfigError};
pub use crate::observability::init_observability;
