use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usage_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub vehicle_id: Option<String>,
    pub usage_date: Option<Date>,
    pub total_hours: Option<f64>,
    pub km_travelled: Option<f64>,
    pub jobs_count: Option<i32>,
    pub project_code: Option<String>,
    pub ownership_type_snapshot: Option<String>,
    pub is_offline: Option<bool>,
    pub source: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
