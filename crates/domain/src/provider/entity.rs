use crate::entity::{Entity, EntityKind};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a hire provider is currently used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderStatus {
    Active,
    Inactive,
}

impl ProviderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl Default for ProviderStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown provider status: {other}"
            ))),
        }
    }
}

/// Company that vehicles are hired from.
///
/// The only entity this system creates or updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HireProvider {
    pub id: String,
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub status: Option<ProviderStatus>,
}

impl Entity for HireProvider {
    const KIND: EntityKind = EntityKind::HireProvider;

    fn id(&self) -> &str {
        &self.id
    }
}
