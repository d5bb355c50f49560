use application::{
    EntityCache, FuelTransactionsPage, PageContext, PrestartChecksPage, ProviderService,
    UsageRecordsPage,
};
use domain::{EntityReader, FleetStore, HireProvider, HireProviderRepository};
use std::sync::Arc;

/// Page services shared by every request. All of them read through one cache.
pub struct AppState {
    pub fuel: FuelTransactionsPage,
    pub prestarts: PrestartChecksPage,
    pub usage: UsageRecordsPage,
    pub providers: ProviderService,
}

impl AppState {
    pub fn new<S: FleetStore + 'static>(store: Arc<S>, fetch_limit: u64) -> Self {
        let cache = Arc::new(EntityCache::new());

        let fleet: Arc<dyn FleetStore> = store.clone();
        let ctx = Arc::new(PageContext::new(fleet, Arc::clone(&cache)).with_fetch_limit(fetch_limit));

        let repository: Arc<dyn HireProviderRepository> = store.clone();
        let reader: Arc<dyn EntityReader<HireProvider>> = store;

        Self {
            fuel: FuelTransactionsPage::new(Arc::clone(&ctx)),
            prestarts: PrestartChecksPage::new(Arc::clone(&ctx)),
            usage: UsageRecordsPage::new(ctx),
            providers: ProviderService::new(repository, reader, cache),
        }
    }
}
