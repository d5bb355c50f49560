//! In-process entity store, used by tests and local demos

use async_trait::async_trait;
use domain::{
    DomainError, EntityKind, EntityReader, FuelTransaction, HireProvider, HireProviderRepository,
    ListQuery, PrestartCheck, ProviderPayload, SortKey, UsageRecord, Vehicle,
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryFleetStore {
    vehicles: RwLock<Vec<Vehicle>>,
    fuel: RwLock<Vec<FuelTransaction>>,
    prestarts: RwLock<Vec<PrestartCheck>>,
    usage: RwLock<Vec<UsageRecord>>,
    providers: RwLock<Vec<HireProvider>>,
}

impl InMemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicles(self, vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: RwLock::new(vehicles),
            ..self
        }
    }

    pub fn with_fuel(self, fuel: Vec<FuelTransaction>) -> Self {
        Self {
            fuel: RwLock::new(fuel),
            ..self
        }
    }

    pub fn with_prestarts(self, prestarts: Vec<PrestartCheck>) -> Self {
        Self {
            prestarts: RwLock::new(prestarts),
            ..self
        }
    }

    pub fn with_usage(self, usage: Vec<UsageRecord>) -> Self {
        Self {
            usage: RwLock::new(usage),
            ..self
        }
    }

    pub fn with_providers(self, providers: Vec<HireProvider>) -> Self {
        Self {
            providers: RwLock::new(providers),
            ..self
        }
    }

    pub async fn push_fuel(&self, tx: FuelTransaction) {
        self.fuel.write().await.push(tx);
    }
}

/// Apply the query's row cap
fn capped<E>(mut rows: Vec<E>, query: &ListQuery) -> Vec<E> {
    if let Some(limit) = query.limit {
        rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    rows
}

#[async_trait]
impl EntityReader<Vehicle> for InMemoryFleetStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Vehicle>, DomainError> {
        query.check_sort(EntityKind::Vehicle)?;
        let rows = self.vehicles.read().await.clone();
        Ok(capped(rows, query))
    }
}

// Sorts are stable, so ties (and absent values, which sort last) keep insertion order

#[async_trait]
impl EntityReader<FuelTransaction> for InMemoryFleetStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<FuelTransaction>, DomainError> {
        query.check_sort(EntityKind::FuelTransaction)?;
        let mut rows = self.fuel.read().await.clone();
        if query.sort == Some(SortKey::TransactionDatetimeDesc) {
            rows.sort_by(|a, b| b.transaction_datetime.cmp(&a.transaction_datetime));
        }
        Ok(capped(rows, query))
    }
}

#[async_trait]
impl EntityReader<PrestartCheck> for InMemoryFleetStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<PrestartCheck>, DomainError> {
        query.check_sort(EntityKind::PrestartCheck)?;
        let mut rows = self.prestarts.read().await.clone();
        if query.sort == Some(SortKey::PrestartDatetimeDesc) {
            rows.sort_by(|a, b| b.prestart_datetime.cmp(&a.prestart_datetime));
        }
        Ok(capped(rows, query))
    }
}

#[async_trait]
impl EntityReader<UsageRecord> for InMemoryFleetStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<UsageRecord>, DomainError> {
        query.check_sort(EntityKind::UsageRecord)?;
        let mut rows = self.usage.read().await.clone();
        if query.sort == Some(SortKey::UsageDateDesc) {
            rows.sort_by(|a, b| b.usage_date.cmp(&a.usage_date));
        }
        Ok(capped(rows, query))
    }
}

#[async_trait]
impl EntityReader<HireProvider> for InMemoryFleetStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<HireProvider>, DomainError> {
        query.check_sort(EntityKind::HireProvider)?;
        let mut rows = self.providers.read().await.clone();
        if query.sort == Some(SortKey::NameAsc) {
            rows.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(capped(rows, query))
    }
}

#[async_trait]
impl HireProviderRepository for InMemoryFleetStore {
    async fn create(&self, payload: &ProviderPayload) -> Result<HireProvider, DomainError> {
        let provider = payload.clone().into_provider(Uuid::new_v4().to_string())?;
        self.providers.write().await.push(provider.clone());
        Ok(provider)
    }

    async fn update(
        &self,
        id: &str,
        payload: &ProviderPayload,
    ) -> Result<HireProvider, DomainError> {
        let mut providers = self.providers.write().await;
        let provider = providers
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound {
                kind: EntityKind::HireProvider,
                id: id.to_string(),
            })?;
        payload.apply_to(provider);
        Ok(provider.clone())
    }
}
