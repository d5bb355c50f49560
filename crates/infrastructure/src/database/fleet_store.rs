use crate::database::entities::{
    fuel_transactions, hire_providers, prestart_checks, usage_records, vehicles,
};
use async_trait::async_trait;
use domain::{
    CheckResult, DomainError, EntityKind, EntityReader, FuelTransaction, HireProvider,
    HireProviderRepository, ListQuery, PrestartCheck, ProviderPayload, ProviderStatus, SortKey,
    UsageRecord, Vehicle,
};
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, Database, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Order,
    QueryOrder, QuerySelect, Set,
};
use std::str::FromStr;
use tracing::{debug, warn};
use uuid::Uuid;

fn db_error(e: DbErr) -> DomainError {
    warn!(error = %e, "Fleet store query failed");
    DomainError::Store(format!("Database error: {}", e))
}

/// Parses a stored enum column, masking values this build does not know as absent
fn parse_column<T: FromStr>(
    kind: EntityKind,
    id: &str,
    column: &str,
    raw: Option<&str>,
) -> Option<T> {
    let raw = raw?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(%kind, id, column, value = raw, "Unrecognised stored value, treated as empty");
            None
        }
    }
}

/// Relational entity store backed by SeaORM (SQLite or PostgreSQL)
#[derive(Clone)]
pub struct SeaOrmFleetStore {
    db: DatabaseConnection,
}

impl SeaOrmFleetStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let db = Database::connect(database_url).await?;
        Ok(Self::new(db))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    fn model_to_vehicle(model: vehicles::Model) -> Vehicle {
        Vehicle {
            id: model.id,
            asset_code: model.asset_code,
            rego: model.rego,
            state: model.state,
            ownership_type: model.ownership_type,
        }
    }

    fn model_to_fuel(model: fuel_transactions::Model) -> FuelTransaction {
        FuelTransaction {
            id: model.id,
            vehicle_id: model.vehicle_id,
            transaction_datetime: model.transaction_datetime,
            litres: model.litres,
            unit_price: model.unit_price,
            total_cost: model.total_cost,
            site_location: model.site_location,
            fuel_type: model.fuel_type,
            odometer_at_fill: model.odometer_at_fill,
        }
    }

    fn model_to_prestart(model: prestart_checks::Model) -> PrestartCheck {
        let overall_result = parse_column::<CheckResult>(
            EntityKind::PrestartCheck,
            &model.id,
            "overall_result",
            model.overall_result.as_deref(),
        );

        PrestartCheck {
            id: model.id,
            vehicle_id: model.vehicle_id,
            prestart_datetime: model.prestart_datetime,
            operator_name: model.operator_name,
            prestart_type: model.prestart_type,
            overall_result,
            defect_count: model.defect_count,
            client_name: model.client_name,
            project_name: model.project_name,
        }
    }

    fn model_to_usage(model: usage_records::Model) -> UsageRecord {
        UsageRecord {
            id: model.id,
            vehicle_id: model.vehicle_id,
            usage_date: model.usage_date,
            total_hours: model.total_hours,
            km_travelled: model.km_travelled,
            jobs_count: model.jobs_count,
            project_code: model.project_code,
            ownership_type_snapshot: model.ownership_type_snapshot,
            is_offline: model.is_offline,
            source: model.source,
        }
    }

    fn model_to_provider(model: hire_providers::Model) -> HireProvider {
        let status = parse_column::<ProviderStatus>(
            EntityKind::HireProvider,
            &model.id,
            "status",
            model.status.as_deref(),
        );

        HireProvider {
            id: model.id,
            name: model.name,
            contact_name: model.contact_name,
            contact_phone: model.contact_phone,
            contact_email: model.contact_email,
            address: model.address,
            notes: model.notes,
            status,
        }
    }
}

#[async_trait]
impl EntityReader<Vehicle> for SeaOrmFleetStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Vehicle>, DomainError> {
        query.check_sort(EntityKind::Vehicle)?;

        let models = vehicles::Entity::find()
            .order_by_asc(vehicles::Column::Id)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Self::model_to_vehicle).collect())
    }
}

#[async_trait]
impl EntityReader<FuelTransaction> for SeaOrmFleetStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<FuelTransaction>, DomainError> {
        query.check_sort(EntityKind::FuelTransaction)?;

        let mut select = fuel_transactions::Entity::find();
        if query.sort == Some(SortKey::TransactionDatetimeDesc) {
            // Undated rows sort last on every backend
            select = select.order_by_with_nulls(
                fuel_transactions::Column::TransactionDatetime,
                Order::Desc,
                NullOrdering::Last,
            );
        }
        let models = select
            .order_by_asc(fuel_transactions::Column::Id)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        debug!(rows = models.len(), "Fuel transactions loaded");
        Ok(models.into_iter().map(Self::model_to_fuel).collect())
    }
}

#[async_trait]
impl EntityReader<PrestartCheck> for SeaOrmFleetStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<PrestartCheck>, DomainError> {
        query.check_sort(EntityKind::PrestartCheck)?;

        let mut select = prestart_checks::Entity::find();
        if query.sort == Some(SortKey::PrestartDatetimeDesc) {
            select = select.order_by_with_nulls(
                prestart_checks::Column::PrestartDatetime,
                Order::Desc,
                NullOrdering::Last,
            );
        }
        let models = select
            .order_by_asc(prestart_checks::Column::Id)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Self::model_to_prestart).collect())
    }
}

#[async_trait]
impl EntityReader<UsageRecord> for SeaOrmFleetStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<UsageRecord>, DomainError> {
        query.check_sort(EntityKind::UsageRecord)?;

        let mut select = usage_records::Entity::find();
        if query.sort == Some(SortKey::UsageDateDesc) {
            select = select.order_by_with_nulls(
                usage_records::Column::UsageDate,
                Order::Desc,
                NullOrdering::Last,
            );
        }
        let models = select
            .order_by_asc(usage_records::Column::Id)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Self::model_to_usage).collect())
    }
}

#[async_trait]
impl EntityReader<HireProvider> for SeaOrmFleetStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<HireProvider>, DomainError> {
        query.check_sort(EntityKind::HireProvider)?;

        let mut select = hire_providers::Entity::find();
        if query.sort == Some(SortKey::NameAsc) {
            select = select.order_by_asc(hire_providers::Column::Name);
        }
        let models = select
            .order_by_asc(hire_providers::Column::Id)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Self::model_to_provider).collect())
    }
}

#[async_trait]
impl HireProviderRepository for SeaOrmFleetStore {
    async fn create(&self, payload: &ProviderPayload) -> Result<HireProvider, DomainError> {
        let provider = payload.clone().into_provider(Uuid::new_v4().to_string())?;

        let active_model = hire_providers::ActiveModel {
            id: Set(provider.id.clone()),
            name: Set(provider.name.clone()),
            contact_name: Set(provider.contact_name.clone()),
            contact_phone: Set(provider.contact_phone.clone()),
            contact_email: Set(provider.contact_email.clone()),
            address: Set(provider.address.clone()),
            notes: Set(provider.notes.clone()),
            status: Set(provider.status.map(|s| s.to_string())),
        };

        hire_providers::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        Ok(provider)
    }

    async fn update(
        &self,
        id: &str,
        payload: &ProviderPayload,
    ) -> Result<HireProvider, DomainError> {
        let model = hire_providers::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or_else(|| DomainError::NotFound {
                kind: EntityKind::HireProvider,
                id: id.to_string(),
            })?;

        // Absent payload fields stay Unchanged and are left out of the UPDATE
        let current = model.clone();
        let mut active_model = model.into_active_model();
        if let Some(name) = &payload.name {
            active_model.name = Set(name.clone());
        }
        if let Some(v) = &payload.contact_name {
            active_model.contact_name = Set(Some(v.clone()));
        }
        if let Some(v) = &payload.contact_phone {
            active_model.contact_phone = Set(Some(v.clone()));
        }
        if let Some(v) = &payload.contact_email {
            active_model.contact_email = Set(Some(v.clone()));
        }
        if let Some(v) = &payload.address {
            active_model.address = Set(Some(v.clone()));
        }
        if let Some(v) = &payload.notes {
            active_model.notes = Set(Some(v.clone()));
        }
        if let Some(status) = payload.status {
            active_model.status = Set(Some(status.to_string()));
        }

        if !active_model.is_changed() {
            return Ok(Self::model_to_provider(current));
        }

        let updated = active_model.update(&self.db).await.map_err(db_error)?;
        Ok(Self::model_to_provider(updated))
    }
}
