//! Page services: cache -> lookup index -> filter -> aggregate -> rows

mod fuel;
mod listing;
mod prestart;
mod usage;

pub use fuel::{FuelRow, FuelTransactionsPage, FuelView};
pub use listing::{Listing, Snapshot};
pub use prestart::{PrestartChecksPage, PrestartRow, PrestartView};
pub use usage::{UsageRecordsPage, UsageRow, UsageView};

use crate::cache::EntityCache;
use crate::view::{ByIdentity, Memo, VehicleIndex};
use domain::{DomainError, EntityKind, FleetStore, ListQuery, RECENT_LIMIT, Vehicle};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Shared collaborators of every listing page
pub struct PageContext {
    store: Arc<dyn FleetStore>,
    cache: Arc<EntityCache>,
    vehicle_index: Memo<ByIdentity<Vec<Vehicle>>, VehicleIndex>,
    fetch_limit: u64,
}

impl PageContext {
    pub fn new(store: Arc<dyn FleetStore>, cache: Arc<EntityCache>) -> Self {
        Self {
            store,
            cache,
            vehicle_index: Memo::new(),
            fetch_limit: RECENT_LIMIT,
        }
    }

    /// Row cap for transaction-like feeds
    pub fn with_fetch_limit(mut self, limit: u64) -> Self {
        self.fetch_limit = limit;
        self
    }

    pub fn store(&self) -> &(dyn FleetStore + 'static) {
        &*self.store
    }

    pub fn cache(&self) -> &EntityCache {
        &self.cache
    }

    pub fn fetch_limit(&self) -> u64 {
        self.fetch_limit
    }

    /// Vehicle lookup index, rebuilt only when the cached vehicle list changes
    pub async fn vehicle_index(&self) -> Result<Arc<VehicleIndex>, DomainError> {
        let vehicles = self
            .cache
            .get_or_fetch::<Vehicle, _>(self.store(), &ListQuery::all())
            .await?;
        Ok(self
            .vehicle_index
            .get_or_compute(ByIdentity(Arc::clone(&vehicles)), || {
                VehicleIndex::build(&vehicles)
            }))
    }

    /// Drop cached lists so the next read re-fetches them
    pub fn refresh(&self, kind: EntityKind) {
        self.cache.invalidate(kind);
        self.cache.invalidate(EntityKind::Vehicle);
    }
}

/// Detail view of a vehicle
pub fn vehicle_link(vehicle_id: Option<&str>) -> Option<String> {
    vehicle_id.map(|id| format!("/vehicles/{id}"))
}

/// Detail view of a prestart check
pub fn prestart_link(prestart_id: &str) -> String {
    format!("/prestarts/{prestart_id}")
}

/// Sorted distinct values, used to populate categorical filter options
pub fn distinct_values<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
