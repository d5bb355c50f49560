//! Integration tests for SeaOrmFleetStore against in-memory SQLite
//! with the schema migration applied.

use chrono::NaiveDate;
use domain::{
    CheckResult, DomainError, EntityKind, EntityReader, FuelTransaction, HireProvider,
    HireProviderRepository, ListQuery, PrestartCheck, ProviderPayload, ProviderStatus, SortKey,
    UsageRecord, Vehicle,
};
use infrastructure::SeaOrmFleetStore;
use infrastructure::database::entities::{
    fuel_transactions, hire_providers, prestart_checks, usage_records, vehicles,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{EntityTrait, Set};

async fn create_test_store() -> SeaOrmFleetStore {
    let store = SeaOrmFleetStore::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(store.connection(), None)
        .await
        .expect("Failed to apply migrations");
    store
}

fn at(day: u32, hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 30, 0)
        .unwrap()
}

async fn seed_fuel(store: &SeaOrmFleetStore, id: &str, day: u32) {
    fuel_transactions::Entity::insert(fuel_transactions::ActiveModel {
        id: Set(id.to_string()),
        vehicle_id: Set(Some("v1".to_string())),
        transaction_datetime: Set(Some(at(day, 8))),
        litres: Set(Some(80.5)),
        unit_price: Set(Some(1.85)),
        total_cost: Set(Some(148.93)),
        site_location: Set(Some("Depot A".to_string())),
        fuel_type: Set(Some("Diesel".to_string())),
        odometer_at_fill: Set(Some(45210.0)),
    })
    .exec(store.connection())
    .await
    .unwrap();
}

#[tokio::test]
async fn test_vehicles_round_trip_optional_fields() {
    let store = create_test_store().await;
    vehicles::Entity::insert(vehicles::ActiveModel {
        id: Set("v1".to_string()),
        asset_code: Set(Some("T-101".to_string())),
        rego: Set(None),
        state: Set(Some("QLD".to_string())),
        ownership_type: Set(Some("Hired".to_string())),
    })
    .exec(store.connection())
    .await
    .unwrap();

    let vehicles: Vec<Vehicle> = store.list(&ListQuery::all()).await.unwrap();

    assert_eq!(
        vehicles,
        vec![
            Vehicle::new("v1", "T-101")
                .with_state("QLD")
                .with_ownership("Hired")
        ]
    );
}

#[tokio::test]
async fn test_fuel_newest_first_with_limit() {
    let store = create_test_store().await;
    seed_fuel(&store, "f1", 1).await;
    seed_fuel(&store, "f3", 3).await;
    seed_fuel(&store, "f2", 2).await;

    let rows: Vec<FuelTransaction> = store
        .list(&ListQuery::recent(SortKey::TransactionDatetimeDesc, 2))
        .await
        .unwrap();

    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["f3", "f2"]);
    assert_eq!(rows[0].transaction_datetime, Some(at(3, 8)));
    assert_eq!(rows[0].odometer_at_fill, Some(45210.0));
}

#[tokio::test]
async fn test_prestart_result_is_parsed() {
    let store = create_test_store().await;
    prestart_checks::Entity::insert(prestart_checks::ActiveModel {
        id: Set("p1".to_string()),
        vehicle_id: Set(Some("v1".to_string())),
        prestart_datetime: Set(Some(at(1, 6))),
        operator_name: Set(Some("Sam Lee".to_string())),
        prestart_type: Set(Some("Daily".to_string())),
        overall_result: Set(Some("Fail".to_string())),
        defect_count: Set(Some(2)),
        client_name: Set(None),
        project_name: Set(None),
    })
    .exec(store.connection())
    .await
    .unwrap();

    let rows: Vec<PrestartCheck> = store
        .list(&ListQuery::recent(SortKey::PrestartDatetimeDesc, 500))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].overall_result, Some(CheckResult::Fail));
    assert_eq!(rows[0].defect_count, Some(2));
}

#[tokio::test]
async fn test_undated_fuel_sorts_after_dated() {
    let store = create_test_store().await;
    fuel_transactions::Entity::insert(fuel_transactions::ActiveModel {
        id: Set("f0".to_string()),
        transaction_datetime: Set(None),
        ..Default::default()
    })
    .exec(store.connection())
    .await
    .unwrap();
    seed_fuel(&store, "f1", 1).await;
    seed_fuel(&store, "f2", 2).await;

    let capped: Vec<FuelTransaction> = store
        .list(&ListQuery::recent(SortKey::TransactionDatetimeDesc, 2))
        .await
        .unwrap();
    let all: Vec<FuelTransaction> = store
        .list(&ListQuery::recent(SortKey::TransactionDatetimeDesc, 500))
        .await
        .unwrap();

    let capped_ids: Vec<_> = capped.iter().map(|r| r.id.as_str()).collect();
    let all_ids: Vec<_> = all.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(capped_ids, vec!["f2", "f1"]);
    assert_eq!(all_ids, vec!["f2", "f1", "f0"]);
}

#[tokio::test]
async fn test_unknown_prestart_result_reads_as_empty() {
    let store = create_test_store().await;
    for (id, result) in [("p1", "Pass"), ("p2", "N/A"), ("p3", "pass")] {
        prestart_checks::Entity::insert(prestart_checks::ActiveModel {
            id: Set(id.to_string()),
            prestart_datetime: Set(Some(at(1, 6))),
            overall_result: Set(Some(result.to_string())),
            ..Default::default()
        })
        .exec(store.connection())
        .await
        .unwrap();
    }

    let rows: Vec<PrestartCheck> = store
        .list(&ListQuery::recent(SortKey::PrestartDatetimeDesc, 500))
        .await
        .unwrap();

    let results: Vec<_> = rows.iter().map(|r| (r.id.as_str(), r.overall_result)).collect();
    assert_eq!(
        results,
        vec![("p1", Some(CheckResult::Pass)), ("p2", None), ("p3", None)]
    );
}

#[tokio::test]
async fn test_unknown_provider_status_reads_as_empty() {
    let store = create_test_store().await;
    hire_providers::Entity::insert(hire_providers::ActiveModel {
        id: Set("hp-1".to_string()),
        name: Set("Legacy Hire".to_string()),
        status: Set(Some("Suspended".to_string())),
        ..Default::default()
    })
    .exec(store.connection())
    .await
    .unwrap();

    let listed: Vec<HireProvider> = store.list(&ListQuery::all()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, None);

    // Still editable, and a valid status replaces the unknown one
    let updated = store
        .update(
            "hp-1",
            &ProviderPayload {
                status: Some(ProviderStatus::Inactive),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, Some(ProviderStatus::Inactive));
}

#[tokio::test]
async fn test_usage_dates_and_flags() {
    let store = create_test_store().await;
    usage_records::Entity::insert(usage_records::ActiveModel {
        id: Set("u1".to_string()),
        vehicle_id: Set(Some("v1".to_string())),
        usage_date: Set(NaiveDate::from_ymd_opt(2024, 3, 4)),
        total_hours: Set(Some(7.5)),
        km_travelled: Set(Some(120.0)),
        jobs_count: Set(Some(3)),
        project_code: Set(Some("PRJ-9".to_string())),
        ownership_type_snapshot: Set(None),
        is_offline: Set(Some(true)),
        source: Set(Some("telematics".to_string())),
    })
    .exec(store.connection())
    .await
    .unwrap();

    let rows: Vec<UsageRecord> = store
        .list(&ListQuery::recent(SortKey::UsageDateDesc, 500))
        .await
        .unwrap();

    assert_eq!(rows[0].usage_date, NaiveDate::from_ymd_opt(2024, 3, 4));
    assert_eq!(rows[0].is_offline, Some(true));
}

#[tokio::test]
async fn test_sort_key_of_other_kind_rejected() {
    let store = create_test_store().await;

    let result: Result<Vec<UsageRecord>, _> = store
        .list(&ListQuery::sorted(SortKey::TransactionDatetimeDesc))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::UnsupportedSort {
            kind: EntityKind::UsageRecord,
            ..
        })
    ));
}

#[tokio::test]
async fn test_provider_create_then_partial_update() {
    let store = create_test_store().await;

    let created = store
        .create(&ProviderPayload {
            name: Some("Acme Hire".to_string()),
            contact_phone: Some("0400 111 222".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.status, Some(ProviderStatus::Active));

    let updated = store
        .update(
            &created.id,
            &ProviderPayload {
                notes: Some("Weekend callouts".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Acme Hire");
    assert_eq!(updated.contact_phone.as_deref(), Some("0400 111 222"));
    assert_eq!(updated.notes.as_deref(), Some("Weekend callouts"));

    let listed: Vec<HireProvider> = store
        .list(&ListQuery::sorted(SortKey::NameAsc))
        .await
        .unwrap();
    assert_eq!(listed, vec![updated]);
}

#[tokio::test]
async fn test_providers_listed_by_name() {
    let store = create_test_store().await;
    for name in ["Zeta Plant", "Acme Hire", "Metro Trucks"] {
        store
            .create(&ProviderPayload {
                name: Some(name.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let listed: Vec<HireProvider> = store
        .list(&ListQuery::sorted(SortKey::NameAsc))
        .await
        .unwrap();

    let names: Vec<_> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Hire", "Metro Trucks", "Zeta Plant"]);
}

#[tokio::test]
async fn test_create_without_name_fails() {
    let store = create_test_store().await;

    let err = store.create(&ProviderPayload::default()).await.unwrap_err();

    assert_eq!(err, DomainError::MissingField("name"));
}

#[tokio::test]
async fn test_update_missing_provider() {
    let store = create_test_store().await;

    let err = store
        .update(
            "nope",
            &ProviderPayload {
                name: Some("X".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { .. }));
}
