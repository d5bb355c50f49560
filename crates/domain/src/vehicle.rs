use crate::entity::{Entity, EntityKind};
use serde::{Deserialize, Serialize};

/// Australian state and territory codes used by the state filter
pub const STATE_CODES: [&str; 8] = ["NSW", "VIC", "QLD", "SA", "WA", "TAS", "NT", "ACT"];

/// A fleet asset. Referenced by every other record through `vehicle_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub asset_code: Option<String>,
    pub rego: Option<String>,
    pub state: Option<String>,
    pub ownership_type: Option<String>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, asset_code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            asset_code: Some(asset_code.into()),
            ..Default::default()
        }
    }

    pub fn with_rego(mut self, rego: impl Into<String>) -> Self {
        self.rego = Some(rego.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_ownership(mut self, ownership_type: impl Into<String>) -> Self {
        self.ownership_type = Some(ownership_type.into());
        self
    }
}

impl Entity for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;

    fn id(&self) -> &str {
        &self.id
    }
}
