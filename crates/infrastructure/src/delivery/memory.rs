use async_trait::async_trait;
use domain::{DomainError, FileDelivery};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Captures delivered files instead of writing them anywhere
#[derive(Clone, Default)]
pub struct MemoryDelivery {
    pub delivered: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivered file names, in order
    pub async fn file_names(&self) -> Vec<String> {
        let delivered = self.delivered.lock().await;
        delivered.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Contents of the most recent file named `file_name`
    pub async fn content(&self, file_name: &str) -> Option<String> {
        let delivered = self.delivered.lock().await;
        delivered
            .iter()
            .rev()
            .find(|(name, _)| name == file_name)
            .map(|(_, bytes)| String::from_utf8_lossy(bytes).into_owned())
    }
}

#[async_trait]
impl FileDelivery for MemoryDelivery {
    async fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<(), DomainError> {
        let mut delivered = self.delivered.lock().await;
        delivered.push((file_name.to_string(), bytes.to_vec()));
        Ok(())
    }
}
