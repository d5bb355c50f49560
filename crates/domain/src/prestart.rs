use crate::entity::{Entity, EntityKind, VehicleLinked};
use crate::error::DomainError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Overall outcome of a prestart check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckResult {
    Pass,
    Fail,
}

impl CheckResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckResult {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pass" => Ok(Self::Pass),
            "Fail" => Ok(Self::Fail),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown prestart result: {other}"
            ))),
        }
    }
}

/// A pre-use inspection performed by an operator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrestartCheck {
    pub id: String,
    pub vehicle_id: Option<String>,
    pub prestart_datetime: Option<NaiveDateTime>,
    pub operator_name: Option<String>,
    pub prestart_type: Option<String>,
    pub overall_result: Option<CheckResult>,
    pub defect_count: Option<i32>,
    pub client_name: Option<String>,
    pub project_name: Option<String>,
}

impl Entity for PrestartCheck {
    const KIND: EntityKind = EntityKind::PrestartCheck;

    fn id(&self) -> &str {
        &self.id
    }
}

impl VehicleLinked for PrestartCheck {
    fn vehicle_id(&self) -> Option<&str> {
        self.vehicle_id.as_deref()
    }
}
