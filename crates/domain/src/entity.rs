use serde::{Deserialize, Serialize};
use std::fmt;

/// Named category of record held by the entity store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Vehicle,
    FuelTransaction,
    PrestartCheck,
    UsageRecord,
    HireProvider,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        Self::Vehicle,
        Self::FuelTransaction,
        Self::PrestartCheck,
        Self::UsageRecord,
        Self::HireProvider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle",
            Self::FuelTransaction => "FuelTransaction",
            Self::PrestartCheck => "PrestartCheck",
            Self::UsageRecord => "UsageRecord",
            Self::HireProvider => "HireProvider",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record managed by the entity store.
///
/// Each kind is a concrete type; stores implement one reader per kind
/// instead of dispatching on a string tag.
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

/// Records that point at a vehicle through `vehicle_id`
pub trait VehicleLinked {
    fn vehicle_id(&self) -> Option<&str>;
}
