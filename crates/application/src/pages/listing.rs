use super::PageContext;
use crate::view::{ByIdentity, Memo, RecordFilter, VehicleIndex, filter_records};
use domain::{DomainError, Entity, EntityReader, FleetStore, ListQuery, SortKey, VehicleLinked};
use std::sync::Arc;

type FilterKey<R, F> = (ByIdentity<Vec<R>>, ByIdentity<VehicleIndex>, F);

/// Everything a page renders from, captured at one instant
pub struct Snapshot<R> {
    /// Full fetched list, newest first
    pub all: Arc<Vec<R>>,
    pub index: Arc<VehicleIndex>,
    /// Records passing the current filter, in fetch order
    pub filtered: Arc<Vec<R>>,
}

/// Fetch + filter pipeline shared by the vehicle-linked pages
pub struct Listing<R, F> {
    ctx: Arc<PageContext>,
    sort: SortKey,
    filtered: Memo<FilterKey<R, F>, Vec<R>>,
}

impl<R, F> Listing<R, F>
where
    R: Entity + VehicleLinked,
    F: RecordFilter<R> + Clone + PartialEq + Send + Sync + 'static,
    dyn FleetStore: EntityReader<R>,
{
    pub fn new(ctx: Arc<PageContext>, sort: SortKey) -> Self {
        Self {
            ctx,
            sort,
            filtered: Memo::new(),
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery::recent(self.sort, self.ctx.fetch_limit())
    }

    pub async fn snapshot(&self, filter: &F) -> Result<Snapshot<R>, DomainError> {
        let all = self
            .ctx
            .cache()
            .get_or_fetch::<R, _>(self.ctx.store(), &self.query())
            .await?;
        let index = self.ctx.vehicle_index().await?;

        let key = (
            ByIdentity(Arc::clone(&all)),
            ByIdentity(Arc::clone(&index)),
            filter.clone(),
        );
        let filtered = self
            .filtered
            .get_or_compute(key, || filter_records(&all, &index, filter));

        Ok(Snapshot {
            all,
            index,
            filtered,
        })
    }

    pub fn refresh(&self) {
        self.ctx.refresh(R::KIND);
    }
}
