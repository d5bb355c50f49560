//! Provider form submissions through ProviderService

use application::view::ProviderFilter;
use application::{EntityCache, FormError, FormMode, ProviderFields, ProviderForm, ProviderService};
use async_trait::async_trait;
use domain::{
    DomainError, EntityKind, EntityReader, HireProvider, HireProviderRepository, ListQuery,
    ProviderPayload, ProviderStatus, Selection,
};
use infrastructure::InMemoryFleetStore;
use mockall::mock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

mock! {
    pub Providers {}

    #[async_trait]
    impl HireProviderRepository for Providers {
        async fn create(&self, payload: &ProviderPayload) -> Result<HireProvider, DomainError>;
        async fn update(&self, id: &str, payload: &ProviderPayload) -> Result<HireProvider, DomainError>;
    }
}

/// Holds every create until released, so a second submit can overlap it
struct GatedRepository {
    inner: Arc<InMemoryFleetStore>,
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl HireProviderRepository for GatedRepository {
    async fn create(&self, payload: &ProviderPayload) -> Result<HireProvider, DomainError> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.create(payload).await
    }

    async fn update(
        &self,
        id: &str,
        payload: &ProviderPayload,
    ) -> Result<HireProvider, DomainError> {
        self.inner.update(id, payload).await
    }
}

/// Reads a snapshot, then holds the first list call until released
struct GatedReader {
    inner: Arc<InMemoryFleetStore>,
    gated: AtomicBool,
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl EntityReader<HireProvider> for GatedReader {
    async fn list(&self, query: &ListQuery) -> Result<Vec<HireProvider>, DomainError> {
        let rows = self.inner.list(query).await?;
        if self.gated.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        Ok(rows)
    }
}

fn service_over(store: &Arc<InMemoryFleetStore>) -> (ProviderService, Arc<EntityCache>) {
    let cache = Arc::new(EntityCache::new());
    let repository: Arc<dyn HireProviderRepository> = store.clone();
    let reader: Arc<dyn EntityReader<HireProvider>> = store.clone();
    (
        ProviderService::new(repository, reader, Arc::clone(&cache)),
        cache,
    )
}

fn acme_fields() -> ProviderFields {
    ProviderFields {
        name: "Acme Hire".to_string(),
        contact_name: "Jo Park".to_string(),
        contact_phone: String::new(),
        contact_email: "ops@acme.test".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_resets_form_and_refreshes_list() {
    let store = Arc::new(InMemoryFleetStore::new());
    let (service, cache) = service_over(&store);

    let before = service.view(&ProviderFilter::default()).await.unwrap();
    assert_eq!(before.empty_message, Some("No hire providers found"));
    assert!(cache.contains(EntityKind::HireProvider));

    let mut form = ProviderForm::new();
    form.fields = acme_fields();
    let saved = service.submit_form(&mut form).await.unwrap();

    assert_eq!(saved.name, "Acme Hire");
    assert_eq!(saved.contact_phone, None);
    assert_eq!(saved.status, Some(ProviderStatus::Active));
    assert_eq!(form.mode(), &FormMode::Creating);
    assert_eq!(form.fields, ProviderFields::default());

    let after = service.view(&ProviderFilter::default()).await.unwrap();
    assert_eq!(after.rows, vec![saved]);
    assert!(after.empty_message.is_none());
}

#[tokio::test]
async fn test_edit_updates_only_submitted_fields() {
    let store = Arc::new(InMemoryFleetStore::new());
    let (service, _cache) = service_over(&store);
    let existing = store
        .create(&ProviderPayload {
            name: Some("Acme Hire".to_string()),
            contact_phone: Some("0400 111 222".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let mut form = ProviderForm::new();
    form.edit(&existing);
    form.fields.contact_phone.clear();
    form.fields.notes = "Weekend callouts".to_string();
    let saved = service.submit_form(&mut form).await.unwrap();

    assert_eq!(saved.id, existing.id);
    // Cleared inputs are omitted, so the stored phone survives
    assert_eq!(saved.contact_phone.as_deref(), Some("0400 111 222"));
    assert_eq!(saved.notes.as_deref(), Some("Weekend callouts"));
    assert!(!form.is_editing());
}

#[tokio::test]
async fn test_failed_save_keeps_form_and_cache() {
    let store = Arc::new(InMemoryFleetStore::new());
    let cache = Arc::new(EntityCache::new());
    let mut repository = MockProviders::new();
    repository
        .expect_update()
        .times(1)
        .returning(|_, _| Err(DomainError::Store("connection reset".to_string())));
    let service = ProviderService::new(Arc::new(repository), store.clone(), Arc::clone(&cache));
    service.view(&ProviderFilter::default()).await.unwrap();

    let mut form = ProviderForm::new();
    form.edit(&HireProvider {
        id: "p-1".to_string(),
        name: "Acme Hire".to_string(),
        ..Default::default()
    });
    let fields_before = form.fields.clone();

    let err = service.submit_form(&mut form).await.unwrap_err();

    assert!(matches!(err, FormError::Domain(DomainError::Store(_))));
    assert!(form.is_editing());
    assert_eq!(form.fields, fields_before);
    assert!(cache.contains(EntityKind::HireProvider));
}

#[tokio::test]
async fn test_invalid_status_never_reaches_store() {
    let store = Arc::new(InMemoryFleetStore::new());
    // No expectations: any call would panic
    let repository = MockProviders::new();
    let service = ProviderService::new(
        Arc::new(repository),
        store.clone(),
        Arc::new(EntityCache::new()),
    );
    let fields = ProviderFields {
        status: "Retired".to_string(),
        ..acme_fields()
    };

    let err = service
        .submit(&FormMode::Creating, &fields)
        .await
        .unwrap_err();

    assert!(matches!(err, FormError::InvalidStatus(s) if s == "Retired"));
}

#[tokio::test]
async fn test_create_without_name_is_rejected() {
    let store = Arc::new(InMemoryFleetStore::new());
    let (service, _cache) = service_over(&store);

    let err = service
        .submit(&FormMode::Creating, &ProviderFields::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FormError::Domain(DomainError::MissingField("name"))
    ));
}

#[tokio::test]
async fn test_concurrent_submit_for_same_target_rejected() {
    let store = Arc::new(InMemoryFleetStore::new());
    let repository = Arc::new(GatedRepository {
        inner: Arc::clone(&store),
        entered: Notify::new(),
        release: Notify::new(),
    });
    let service = Arc::new(ProviderService::new(
        repository.clone(),
        store.clone(),
        Arc::new(EntityCache::new()),
    ));

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.submit(&FormMode::Creating, &acme_fields()).await })
    };
    repository.entered.notified().await;

    let second = service.submit(&FormMode::Creating, &acme_fields()).await;
    assert!(matches!(second, Err(FormError::SubmissionInFlight(_))));

    // A different target is not blocked
    let other = service
        .submit(
            &FormMode::Editing {
                id: "p-404".to_string(),
            },
            &acme_fields(),
        )
        .await;
    assert!(matches!(
        other,
        Err(FormError::Domain(DomainError::NotFound { .. }))
    ));

    repository.release.notify_one();
    let created = first.await.unwrap().unwrap();
    assert_eq!(created.name, "Acme Hire");

    // Guard released once the first submission resolved
    let edited = service
        .submit(
            &FormMode::Editing {
                id: created.id.clone(),
            },
            &ProviderFields {
                notes: "Second pass".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.notes.as_deref(), Some("Second pass"));
}

#[tokio::test]
async fn test_list_fetched_before_save_is_not_cached() {
    let store = Arc::new(InMemoryFleetStore::new());
    let reader = Arc::new(GatedReader {
        inner: Arc::clone(&store),
        gated: AtomicBool::new(true),
        entered: Notify::new(),
        release: Notify::new(),
    });
    let cache = Arc::new(EntityCache::new());
    let service = Arc::new(ProviderService::new(
        store.clone(),
        reader.clone(),
        Arc::clone(&cache),
    ));

    let slow_view = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.view(&ProviderFilter::default()).await })
    };
    reader.entered.notified().await;

    let saved = service
        .submit(&FormMode::Creating, &acme_fields())
        .await
        .unwrap();

    reader.release.notify_one();
    let stale = slow_view.await.unwrap().unwrap();
    assert!(stale.rows.is_empty());
    assert!(!cache.contains(EntityKind::HireProvider));

    let fresh = service.view(&ProviderFilter::default()).await.unwrap();
    assert_eq!(fresh.rows, vec![saved]);
}

#[tokio::test]
async fn test_provider_filters() {
    let store = Arc::new(InMemoryFleetStore::new().with_providers(vec![
        HireProvider {
            id: "p-2".to_string(),
            name: "Zeta Plant".to_string(),
            contact_email: Some("hire@zeta.test".to_string()),
            status: Some(ProviderStatus::Inactive),
            ..Default::default()
        },
        HireProvider {
            id: "p-1".to_string(),
            name: "Acme Hire".to_string(),
            contact_email: Some("ops@acme.test".to_string()),
            status: Some(ProviderStatus::Active),
            ..Default::default()
        },
    ]));
    let (service, _cache) = service_over(&store);

    let all = service.view(&ProviderFilter::default()).await.unwrap();
    let names: Vec<_> = all.rows.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Hire", "Zeta Plant"]);

    let inactive = service
        .view(&ProviderFilter {
            status: Selection::Only(ProviderStatus::Inactive),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(inactive.filtered_records, 1);
    assert_eq!(inactive.total_records, 2);

    let by_email = service
        .view(&ProviderFilter {
            search: "ACME.TEST".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_email.rows[0].id, "p-1");
}
