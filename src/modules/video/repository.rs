use crate::{
    api::error,
    modules::video::{
        model::{DeleteResult, InsertVideo, UpdateVideo},
        schema::VideoEntity,
    },
};

#[async_trait::async_trait]
pub trait VideoRepository {
    async fn find_all(&self) -> Result<Vec<VideoEntity>, error::SystemError>;

    /// Fails with [`error::SystemError::NotFound`] when no row has this id.
    async fn find_by_id(&self, id: i64) -> Result<VideoEntity, error::SystemError>;

    /// Inserts the row and returns it as read back from the store.
    async fn create(&self, video: &InsertVideo) -> Result<VideoEntity, error::SystemError>;

    /// Overwrites name, description and genre. Fails with `NotFound` when no row matched.
    async fn update(&self, id: i64, video: &UpdateVideo) -> Result<(), error::SystemError>;

    async fn delete(&self, id: i64) -> Result<DeleteResult, error::SystemError>;
}
