pub mod entities;
mod fleet_store;

pub use fleet_store::SeaOrmFleetStore;
