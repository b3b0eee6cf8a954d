use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::UPLOAD_URL_PREFIX;

/// File upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory the files are written to.
    pub upload_dir: PathBuf,
    /// Prefix of the stored relative path, also the URL prefix of the static mount.
    pub public_prefix: String,
}

impl UploadConfig {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self { upload_dir: upload_dir.into(), public_prefix: UPLOAD_URL_PREFIX.to_string() }
    }

    pub fn mount_path(&self) -> String {
        format!("/{}", self.public_prefix)
    }
}

/// A file received in a multipart request, kept in memory until it is stored.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UploadedFile {
    pub original_filename: String,
    pub bytes: Vec<u8>,
}

/// Text fields and the file field of a multipart form.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl MultipartForm {
    pub fn take_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }
}
