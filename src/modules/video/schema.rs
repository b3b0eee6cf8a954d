use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// A row of the `videos` table, serialized with its column names.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct VideoEntity {
    pub video_id: i64,
    pub video_name: String,
    pub video_description: Option<String>,
    pub genre: Option<String>,
    pub video_path: String,
}
