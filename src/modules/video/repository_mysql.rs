use crate::{
    api::error,
    modules::video::{
        model::{DeleteResult, InsertVideo, UpdateVideo},
        repository::VideoRepository,
        schema::VideoEntity,
    },
};

#[derive(Clone)]
pub struct VideoRepositoryMySql {
    pool: sqlx::MySqlPool,
}

impl VideoRepositoryMySql {
    pub fn new(pool: sqlx::MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl VideoRepository for VideoRepositoryMySql {
    async fn find_all(&self) -> Result<Vec<VideoEntity>, error::SystemError> {
        let videos = sqlx::query_as::<_, VideoEntity>("SELECT * FROM videos")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| error::SystemError::operation_failed("Failed to fetch videos", e))?;
        Ok(videos)
    }

    async fn find_by_id(&self, id: i64) -> Result<VideoEntity, error::SystemError> {
        sqlx::query_as::<_, VideoEntity>("SELECT * FROM videos WHERE video_id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error::SystemError::operation_failed(format!("Failed to fetch video with ID {id}"), e)
            })?
            .ok_or_else(|| error::SystemError::not_found(format!("Video with ID {id} not found")))
    }

    async fn create(&self, video: &InsertVideo) -> Result<VideoEntity, error::SystemError> {
        let result = sqlx::query(
            r#"
            INSERT INTO videos (video_name, video_description, genre, video_path)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&video.video_name)
        .bind(&video.video_description)
        .bind(&video.genre)
        .bind(&video.video_path)
        .execute(&self.pool)
        .await
        .map_err(|e| error::SystemError::operation_failed("Failed to create video", e))?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await
            .map_err(|e| error::SystemError::operation_failed("Failed to create video", e))
    }

    async fn update(&self, id: i64, video: &UpdateVideo) -> Result<(), error::SystemError> {
        let rows = sqlx::query(
            r#"
            UPDATE videos
            SET video_name = ?, video_description = ?, genre = ?
            WHERE video_id = ?
            "#,
        )
        .bind(&video.video_name)
        .bind(&video.video_description)
        .bind(&video.genre)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error::SystemError::operation_failed(format!("Failed to update video with ID {id}"), e)
        })?
        .rows_affected();

        if rows == 0 {
            return Err(error::SystemError::not_found(format!("Video with ID {id} not found")));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<DeleteResult, error::SystemError> {
        let affected = sqlx::query("DELETE FROM videos WHERE video_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error::SystemError::operation_failed(format!("Failed to delete video with ID {id}"), e)
            })?
            .rows_affected();

        Ok(DeleteResult { affected })
    }
}
