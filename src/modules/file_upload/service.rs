use std::path::Path;
use uuid::Uuid;

use crate::api::error;
use crate::modules::file_upload::model::{UploadConfig, UploadedFile};

#[derive(Clone)]
pub struct FileUploadService {
    config: UploadConfig,
}

impl FileUploadService {
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    /// Generate unique filename, keeping the original extension
    fn generate_filename(&self, original_filename: &str) -> String {
        let extension =
            Path::new(original_filename).extension().and_then(|ext| ext.to_str()).unwrap_or("");
        let uuid = Uuid::now_v7();
        if extension.is_empty() {
            uuid.to_string()
        } else {
            format!("{}.{}", uuid, extension)
        }
    }

    /// Save file to disk
    async fn save_file(&self, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.config.upload_dir).await?;
        tokio::fs::write(self.config.upload_dir.join(filename), bytes).await
    }

    /// Persists the upload and returns the path to record, relative to the server root.
    pub async fn store(&self, file: &UploadedFile) -> Result<String, error::SystemError> {
        let filename = self.generate_filename(&file.original_filename);

        self.save_file(&filename, &file.bytes)
            .await
            .map_err(|e| error::SystemError::operation_failed("Failed to save uploaded file", e))?;

        log::info!("Stored upload {} as {}", file.original_filename, filename);
        Ok(format!("{}/{}", self.config.public_prefix, filename))
    }
}
