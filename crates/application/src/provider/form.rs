use domain::{DomainError, HireProvider, ProviderPayload, ProviderStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("A submission for {0} is already in flight")]
    SubmissionInFlight(String),
    #[error("Invalid provider status: {0}")]
    InvalidStatus(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Whether a submit creates a new provider or updates an existing one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing { id: String },
}

/// Raw text inputs, exactly as typed. Empty means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderFields {
    pub name: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub address: String,
    pub notes: String,
    pub status: String,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

impl ProviderFields {
    pub fn from_provider(provider: &HireProvider) -> Self {
        Self {
            name: provider.name.clone(),
            contact_name: text(provider.contact_name.as_ref()),
            contact_phone: text(provider.contact_phone.as_ref()),
            contact_email: text(provider.contact_email.as_ref()),
            address: text(provider.address.as_ref()),
            notes: text(provider.notes.as_ref()),
            status: provider
                .status
                .map(|s| s.to_string())
                .unwrap_or_default(),
        }
    }

    /// Request body with every empty field left out
    pub fn to_payload(&self) -> Result<ProviderPayload, FormError> {
        let status = match self.status.as_str() {
            "" => None,
            raw => Some(
                raw.parse::<ProviderStatus>()
                    .map_err(|_| FormError::InvalidStatus(raw.to_string()))?,
            ),
        };

        Ok(ProviderPayload {
            name: non_empty(&self.name),
            contact_name: non_empty(&self.contact_name),
            contact_phone: non_empty(&self.contact_phone),
            contact_email: non_empty(&self.contact_email),
            address: non_empty(&self.address),
            notes: non_empty(&self.notes),
            status,
        })
    }
}

/// Create/edit form state. Starts in [`FormMode::Creating`] with blank fields.
#[derive(Debug, Clone, Default)]
pub struct ProviderForm {
    mode: FormMode,
    pub fields: ProviderFields,
}

impl ProviderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to editing `provider`, loading its current values
    pub fn edit(&mut self, provider: &HireProvider) {
        self.mode = FormMode::Editing {
            id: provider.id.clone(),
        };
        self.fields = ProviderFields::from_provider(provider);
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing { .. })
    }

    pub fn payload(&self) -> Result<ProviderPayload, FormError> {
        self.fields.to_payload()
    }

    /// Back to creating with every field cleared
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn acme() -> HireProvider {
        HireProvider {
            id: "p-1".to_string(),
            name: "Acme Hire".to_string(),
            contact_email: Some("ops@acme.test".to_string()),
            status: Some(ProviderStatus::Active),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_strings_are_omitted() {
        let fields = ProviderFields {
            name: "Acme".to_string(),
            contact_phone: String::new(),
            ..Default::default()
        };

        let payload = fields.to_payload().unwrap();

        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"name": "Acme"}));
    }

    #[test]
    fn test_status_is_parsed() {
        let fields = ProviderFields {
            name: "Acme".to_string(),
            status: "Inactive".to_string(),
            ..Default::default()
        };
        assert_eq!(
            fields.to_payload().unwrap().status,
            Some(ProviderStatus::Inactive)
        );

        let bad = ProviderFields {
            status: "retired".to_string(),
            ..fields
        };
        assert!(matches!(bad.to_payload(), Err(FormError::InvalidStatus(s)) if s == "retired"));
    }

    #[test]
    fn test_edit_loads_provider() {
        let mut form = ProviderForm::new();
        assert_eq!(form.mode(), &FormMode::Creating);

        form.edit(&acme());

        assert_eq!(
            form.mode(),
            &FormMode::Editing {
                id: "p-1".to_string()
            }
        );
        assert_eq!(form.fields.name, "Acme Hire");
        assert_eq!(form.fields.contact_email, "ops@acme.test");
        assert_eq!(form.fields.contact_phone, "");
        assert_eq!(form.fields.status, "Active");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = ProviderForm::new();
        form.edit(&acme());

        form.reset();

        assert!(!form.is_editing());
        assert_eq!(form.fields, ProviderFields::default());
    }
}
