//! Infrastructure layer - Store, delivery and configuration adapters

pub mod config;
pub mod database;
pub mod delivery;
pub mod memory;

pub use config::AdminConfig;
pub use database::SeaOrmFleetStore;
pub use delivery::{DirectoryDelivery, MemoryDelivery};
pub use memory::InMemoryFleetStore;
