use super::entity::{HireProvider, ProviderStatus};
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Fields sent to the store on create or update.
///
/// A `None` field is absent from the request entirely, so an update never
/// overwrites a stored value with a blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProviderStatus>,
}

impl ProviderPayload {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build a new provider record. `name` is mandatory on create.
    pub fn into_provider(self, id: String) -> Result<HireProvider> {
        let name = self.name.ok_or(DomainError::MissingField("name"))?;
        Ok(HireProvider {
            id,
            name,
            contact_name: self.contact_name,
            contact_phone: self.contact_phone,
            contact_email: self.contact_email,
            address: self.address,
            notes: self.notes,
            status: Some(self.status.unwrap_or_default()),
        })
    }

    /// Overwrite only the fields present in the payload
    pub fn apply_to(&self, provider: &mut HireProvider) {
        if let Some(name) = &self.name {
            provider.name = name.clone();
        }
        if self.contact_name.is_some() {
            provider.contact_name = self.contact_name.clone();
        }
        if self.contact_phone.is_some() {
            provider.contact_phone = self.contact_phone.clone();
        }
        if self.contact_email.is_some() {
            provider.contact_email = self.contact_email.clone();
        }
        if self.address.is_some() {
            provider.address = self.address.clone();
        }
        if self.notes.is_some() {
            provider.notes = self.notes.clone();
        }
        if self.status.is_some() {
            provider.status = self.status;
        }
    }
}
