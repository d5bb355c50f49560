use crate::entity::{Entity, EntityKind, VehicleLinked};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily utilisation of a vehicle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub id: String,
    pub vehicle_id: Option<String>,
    pub usage_date: Option<NaiveDate>,
    pub total_hours: Option<f64>,
    pub km_travelled: Option<f64>,
    pub jobs_count: Option<i32>,
    pub project_code: Option<String>,
    /// Ownership category captured when the record was written
    pub ownership_type_snapshot: Option<String>,
    pub is_offline: Option<bool>,
    pub source: Option<String>,
}

impl Entity for UsageRecord {
    const KIND: EntityKind = EntityKind::UsageRecord;

    fn id(&self) -> &str {
        &self.id
    }
}

impl VehicleLinked for UsageRecord {
    fn vehicle_id(&self) -> Option<&str> {
        self.vehicle_id.as_deref()
    }
}
