//! Domain layer - Fleet records and the ports used to reach them
//!
//! This crate contains:
//! - Entities (Vehicle, FuelTransaction, PrestartCheck, UsageRecord, HireProvider)
//! - Value Objects (Selection, CheckResult, ProviderStatus, SortKey, ListQuery)
//! - Store and delivery interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Records are flat; the store is the only validator
//! - Testable in isolation

pub mod delivery;
pub mod entity;
pub mod error;
pub mod fuel;
pub mod prestart;
pub mod provider;
pub mod query;
pub mod selection;
pub mod store;
pub mod usage;
pub mod vehicle;

// Re-export commonly used types
pub use delivery::FileDelivery;
pub use entity::{Entity, EntityKind, VehicleLinked};
pub use error::DomainError;
pub use fuel::FuelTransaction;
pub use prestart::{CheckResult, PrestartCheck};
pub use provider::{HireProvider, HireProviderRepository, ProviderPayload, ProviderStatus};
pub use query::{ListQuery, RECENT_LIMIT, SortKey};
pub use selection::Selection;
pub use store::{EntityReader, FleetStore};
pub use usage::UsageRecord;
pub use vehicle::{STATE_CODES, Vehicle};
