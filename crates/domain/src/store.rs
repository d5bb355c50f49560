use crate::entity::Entity;
use crate::error::DomainError;
use crate::provider::{HireProvider, HireProviderRepository};
use crate::query::ListQuery;
use crate::{FuelTransaction, PrestartCheck, UsageRecord, Vehicle};
use async_trait::async_trait;

/// Read side of the entity store, one implementation per entity kind
#[async_trait]
pub trait EntityReader<E: Entity>: Send + Sync {
    /// List records of kind `E`, honouring the query's ordering and cap
    async fn list(&self, query: &ListQuery) -> Result<Vec<E>, DomainError>;
}

/// Everything the admin pages need from the backing store
pub trait FleetStore:
    EntityReader<Vehicle>
    + EntityReader<FuelTransaction>
    + EntityReader<PrestartCheck>
    + EntityReader<UsageRecord>
    + EntityReader<HireProvider>
    + HireProviderRepository
{
}

impl<T> FleetStore for T where
    T: EntityReader<Vehicle>
        + EntityReader<FuelTransaction>
        + EntityReader<PrestartCheck>
        + EntityReader<UsageRecord>
        + EntityReader<HireProvider>
        + HireProviderRepository
{
}
