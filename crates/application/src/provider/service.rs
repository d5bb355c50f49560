use super::form::{FormError, FormMode, ProviderFields, ProviderForm};
use crate::cache::EntityCache;
use crate::view::{ByIdentity, Memo, ProviderFilter};
use dashmap::DashSet;
use domain::{
    DomainError, EntityKind, EntityReader, HireProvider, HireProviderRepository, ListQuery,
    ProviderPayload, SortKey,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

pub const EMPTY_MESSAGE: &str = "No hire providers found";

#[derive(Debug, Clone, Serialize)]
pub struct ProviderView {
    pub rows: Vec<HireProvider>,
    pub total_records: usize,
    pub filtered_records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

/// Removes its key from the in-flight set when the submission resolves
struct InFlight<'a> {
    set: &'a DashSet<String>,
    key: String,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.set.remove(&self.key);
    }
}

/// Lists hire providers and saves form submissions.
pub struct ProviderService {
    repository: Arc<dyn HireProviderRepository>,
    reader: Arc<dyn EntityReader<HireProvider>>,
    cache: Arc<EntityCache>,
    in_flight: DashSet<String>,
    filtered: Memo<(ByIdentity<Vec<HireProvider>>, ProviderFilter), Vec<HireProvider>>,
}

impl ProviderService {
    pub fn new(
        repository: Arc<dyn HireProviderRepository>,
        reader: Arc<dyn EntityReader<HireProvider>>,
        cache: Arc<EntityCache>,
    ) -> Self {
        Self {
            repository,
            reader,
            cache,
            in_flight: DashSet::new(),
            filtered: Memo::new(),
        }
    }

    pub async fn view(&self, filter: &ProviderFilter) -> Result<ProviderView, DomainError> {
        let all = self
            .cache
            .get_or_fetch::<HireProvider, _>(&*self.reader, &ListQuery::sorted(SortKey::NameAsc))
            .await?;

        let key = (ByIdentity(Arc::clone(&all)), filter.clone());
        let filtered = self.filtered.get_or_compute(key, || filter.apply(&all));

        Ok(ProviderView {
            rows: (*filtered).clone(),
            total_records: all.len(),
            filtered_records: filtered.len(),
            empty_message: filtered.is_empty().then_some(EMPTY_MESSAGE),
        })
    }

    pub fn refresh(&self) {
        self.cache.invalidate(EntityKind::HireProvider);
    }

    /// Create or update from raw form fields.
    ///
    /// A second submit for the same target fails with
    /// [`FormError::SubmissionInFlight`] until the first one resolves.
    pub async fn submit(
        &self,
        mode: &FormMode,
        fields: &ProviderFields,
    ) -> Result<HireProvider, FormError> {
        let payload = fields.to_payload()?;
        let key = in_flight_key(mode, &payload);
        let _guard = self.begin(key)?;

        let saved = match mode {
            FormMode::Creating => self.repository.create(&payload).await,
            FormMode::Editing { id } => self.repository.update(id, &payload).await,
        };

        match saved {
            Ok(provider) => {
                self.cache.invalidate(EntityKind::HireProvider);
                info!(provider_id = %provider.id, name = %provider.name, "💾 Hire provider saved");
                Ok(provider)
            }
            Err(e) => {
                warn!(error = %e, "⚠️ Hire provider save failed");
                Err(e.into())
            }
        }
    }

    /// Submit `form`, resetting it on success. On failure it is left untouched.
    pub async fn submit_form(&self, form: &mut ProviderForm) -> Result<HireProvider, FormError> {
        let provider = self.submit(form.mode(), &form.fields).await?;
        form.reset();
        Ok(provider)
    }

    fn begin(&self, key: String) -> Result<InFlight<'_>, FormError> {
        if !self.in_flight.insert(key.clone()) {
            return Err(FormError::SubmissionInFlight(key));
        }
        Ok(InFlight {
            set: &self.in_flight,
            key,
        })
    }
}

fn in_flight_key(mode: &FormMode, payload: &ProviderPayload) -> String {
    match mode {
        FormMode::Editing { id } => format!("provider {id}"),
        FormMode::Creating => format!(
            "new provider '{}'",
            payload
                .name
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase()
        ),
    }
}
