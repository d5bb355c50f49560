use crate::DomainError;
use async_trait::async_trait;

/// Hands a finished export to the user as a named file
#[async_trait]
pub trait FileDelivery: Send + Sync {
    async fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<(), DomainError>;
}
