use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prestart_checks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub vehicle_id: Option<String>,
    pub prestart_datetime: Option<DateTime>,
    pub operator_name: Option<String>,
    pub prestart_type: Option<String>,
    pub overall_result: Option<String>, // "Pass" | "Fail"
    pub defect_count: Option<i32>,
    pub client_name: Option<String>,
    pub project_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
