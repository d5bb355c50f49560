use crate::entity::{Entity, EntityKind, VehicleLinked};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single fuel fill recorded against a vehicle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelTransaction {
    pub id: String,
    pub vehicle_id: Option<String>,
    pub transaction_datetime: Option<NaiveDateTime>,
    pub litres: Option<f64>,
    pub unit_price: Option<f64>,
    pub total_cost: Option<f64>,
    pub site_location: Option<String>,
    pub fuel_type: Option<String>,
    pub odometer_at_fill: Option<f64>,
}

impl Entity for FuelTransaction {
    const KIND: EntityKind = EntityKind::FuelTransaction;

    fn id(&self) -> &str {
        &self.id
    }
}

impl VehicleLinked for FuelTransaction {
    fn vehicle_id(&self) -> Option<&str> {
        self.vehicle_id.as_deref()
    }
}
