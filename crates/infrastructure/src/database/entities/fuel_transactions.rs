use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fuel_transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub vehicle_id: Option<String>,
    pub transaction_datetime: Option<DateTime>,
    pub litres: Option<f64>,
    pub unit_price: Option<f64>,
    pub total_cost: Option<f64>,
    pub site_location: Option<String>,
    pub fuel_type: Option<String>,
    pub odometer_at_fill: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
