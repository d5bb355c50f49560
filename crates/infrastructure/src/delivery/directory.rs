use async_trait::async_trait;
use domain::{DomainError, FileDelivery};
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};

/// Writes exports as files under a local or shared directory
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl FileDelivery for DirectoryDelivery {
    async fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<(), DomainError> {
        // Only the final path component is honoured
        let file_name = Path::new(file_name)
            .file_name()
            .ok_or_else(|| DomainError::Delivery(format!("Invalid file name: {file_name}")))?;

        if let Err(e) = tokio::fs::create_dir_all(&self.dir).await {
            error!("Failed to create export directory {:?}: {}", self.dir, e);
            return Err(DomainError::Delivery(e.to_string()));
        }

        let path = self.dir.join(file_name);
        // Same-day exports replace the previous file
        match OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .await
        {
            Ok(mut file) => {
                if let Err(e) = file.write_all(bytes).await {
                    error!("Failed to write export file {:?}: {}", path, e);
                    return Err(DomainError::Delivery(e.to_string()));
                }
                if let Err(e) = file.flush().await {
                    error!("Failed to flush export file {:?}: {}", path, e);
                    return Err(DomainError::Delivery(e.to_string()));
                }
                info!(path = ?path, bytes = bytes.len(), "📄 Export written");
                Ok(())
            }
            Err(e) => {
                error!("Failed to open export file {:?}: {}", path, e);
                Err(DomainError::Delivery(e.to_string()))
            }
        }
    }
}
