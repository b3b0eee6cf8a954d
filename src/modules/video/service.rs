use log::info;
use std::sync::Arc;

use crate::api::{error, success::Ack};
use crate::modules::file_upload::FileUploadService;
use crate::modules::video::model::{
    CreateVideoForm, DeleteResult, InsertVideo, UpdateVideo, UpdateVideoModel,
};
use crate::modules::video::{repository::VideoRepository, schema::VideoEntity};

#[derive(Clone)]
pub struct VideoService {
    repo: Arc<dyn VideoRepository + Send + Sync>,
    uploads: Arc<FileUploadService>,
}

impl VideoService {
    pub fn with_dependencies(
        repo: Arc<dyn VideoRepository + Send + Sync>,
        uploads: Arc<FileUploadService>,
    ) -> Self {
        info!("VideoService initialized with dependencies");
        VideoService { repo, uploads }
    }

    pub async fn list(&self) -> Result<Vec<VideoEntity>, error::SystemError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VideoEntity, error::SystemError> {
        self.repo.find_by_id(id).await
    }

    /// Stores the uploaded file, then inserts the row pointing at it.
    pub async fn create(&self, form: CreateVideoForm) -> Result<VideoEntity, error::SystemError> {
        let (Some(video_name), Some(file)) = (form.video_name, form.file) else {
            return Err(error::SystemError::bad_request("Video name and file are required"));
        };

        let video_path = self.uploads.store(&file).await?;

        let new_video = InsertVideo {
            video_name,
            video_description: form.video_description,
            genre: form.genre,
            video_path,
        };

        let video = self.repo.create(&new_video).await?;
        info!("Video {} created at {}", video.video_id, video.video_path);
        Ok(video)
    }

    /// Merges the supplied fields over the stored row before writing, so fields left out
    /// (or sent empty) keep their current value.
    pub async fn update(
        &self,
        id: i64,
        model: UpdateVideoModel,
    ) -> Result<Ack, error::SystemError> {
        let current = self.repo.find_by_id(id).await?;

        let merged = UpdateVideo {
            video_name: model.video_name.filter(|v| !v.is_empty()).unwrap_or(current.video_name),
            video_description: model
                .video_description
                .filter(|v| !v.is_empty())
                .or(current.video_description),
            genre: model.genre.filter(|v| !v.is_empty()).or(current.genre),
        };

        self.repo.update(id, &merged).await?;
        Ok(Ack::new(format!("Video with ID {id} updated successfully")))
    }

    /// Removes the row only; the uploaded file stays on disk.
    pub async fn delete(&self, id: i64) -> Result<DeleteResult, error::SystemError> {
        self.repo.delete(id).await
    }
}
