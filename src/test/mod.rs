#![allow(dead_code)]

use std::sync::Mutex;

use crate::{
    api::error,
    modules::video::{
        model::{DeleteResult, InsertVideo, UpdateVideo},
        repository::VideoRepository,
        schema::VideoEntity,
    },
};

/// `VideoRepository` kept in memory, with auto-increment ids starting at 1.
#[derive(Default)]
pub struct InMemoryVideoRepository {
    rows: Mutex<Vec<VideoEntity>>,
    next_id: Mutex<i64>,
    failing: bool,
}

impl InMemoryVideoRepository {
    /// Every operation fails as if the database were unreachable.
    pub fn failing() -> Self {
        Self { failing: true, ..Default::default() }
    }

    fn check(&self, context: String) -> Result<(), error::SystemError> {
        if self.failing {
            let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "db down");
            return Err(error::SystemError::operation_failed(context, cause));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn find_all(&self) -> Result<Vec<VideoEntity>, error::SystemError> {
        self.check("Failed to fetch videos".to_string())?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<VideoEntity, error::SystemError> {
        self.check(format!("Failed to fetch video with ID {id}"))?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.video_id == id)
            .cloned()
            .ok_or_else(|| error::SystemError::not_found(format!("Video with ID {id} not found")))
    }

    async fn create(&self, video: &InsertVideo) -> Result<VideoEntity, error::SystemError> {
        self.check("Failed to create video".to_string())?;
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };
        self.rows.lock().unwrap().push(VideoEntity {
            video_id: id,
            video_name: video.video_name.clone(),
            video_description: video.video_description.clone(),
            genre: video.genre.clone(),
            video_path: video.video_path.clone(),
        });
        self.find_by_id(id).await
    }

    async fn update(&self, id: i64, video: &UpdateVideo) -> Result<(), error::SystemError> {
        self.check(format!("Failed to update video with ID {id}"))?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|v| v.video_id == id)
            .ok_or_else(|| error::SystemError::not_found(format!("Video with ID {id} not found")))?;
        row.video_name = video.video_name.clone();
        row.video_description = video.video_description.clone();
        row.genre = video.genre.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<DeleteResult, error::SystemError> {
        self.check(format!("Failed to delete video with ID {id}"))?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|v| v.video_id != id);
        Ok(DeleteResult { affected: (before - rows.len()) as u64 })
    }
}
