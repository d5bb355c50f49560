use super::{HireProvider, ProviderPayload};
use crate::DomainError;
use async_trait::async_trait;

/// Write side of the hire provider store
///
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait HireProviderRepository: Send + Sync {
    /// Create a provider from the submitted fields
    async fn create(&self, payload: &ProviderPayload) -> Result<HireProvider, DomainError>;

    /// Update only the submitted fields of an existing provider
    async fn update(&self, id: &str, payload: &ProviderPayload)
    -> Result<HireProvider, DomainError>;
}
