pub mod handle;
pub mod model;
pub mod service;

pub use handle::read_multipart;
pub use model::{MultipartForm, UploadConfig, UploadedFile};
pub use service::FileUploadService;
