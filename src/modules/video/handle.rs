use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web};
use validator::Validate;

use crate::api::{
    error,
    success::{self, Ack},
};
use crate::modules::file_upload::read_multipart;
use crate::modules::video::model::{CreateVideoForm, UpdateVideoModel, VIDEO_FILE_FIELD};
use crate::modules::video::{schema::VideoEntity, service::VideoService};
use crate::utils::ValidatedJson;

/// Ids that are not integers cannot match any row.
fn parse_id(raw: &str) -> Result<i64, error::Error> {
    raw.parse::<i64>()
        .map_err(|_| error::Error::not_found(format!("Video with ID {raw} not found")))
}

#[get("/videos")]
pub async fn list_videos(
    video_service: web::Data<VideoService>,
) -> Result<success::Success<Vec<VideoEntity>>, error::Error> {
    let videos = video_service
        .list()
        .await
        .map_err(|e| error::Error::from(e).with_internal_message("Error retrieving videos"))?;
    Ok(success::Success::ok(videos))
}

#[get("/videos/{id}")]
pub async fn get_video(
    video_service: web::Data<VideoService>,
    id: web::Path<String>,
) -> Result<success::Success<VideoEntity>, error::Error> {
    let raw = id.into_inner();
    let video = video_service.get_by_id(parse_id(&raw)?).await.map_err(|e| {
        error::Error::from(e).with_internal_message(format!("Error retrieving video with ID {raw}"))
    })?;
    Ok(success::Success::ok(video))
}

#[post("/createVideoWithFile")]
pub async fn create_video_with_file(
    video_service: web::Data<VideoService>,
    payload: Multipart,
) -> Result<success::Success<VideoEntity>, error::Error> {
    let form = CreateVideoForm::from(read_multipart(payload, VIDEO_FILE_FIELD).await?);
    form.validate().map_err(|_| error::Error::bad_request("Video name and file are required"))?;

    let video = video_service
        .create(form)
        .await
        .map_err(|e| error::Error::from(e).with_internal_message("Error creating video"))?;
    Ok(success::Success::created(video))
}

#[put("/updateVideoById/{id}")]
pub async fn update_video_by_id(
    video_service: web::Data<VideoService>,
    id: web::Path<String>,
    video_data: ValidatedJson<UpdateVideoModel>,
) -> Result<success::Success<Ack>, error::Error> {
    let raw = id.into_inner();
    let ack = video_service.update(parse_id(&raw)?, video_data.0).await.map_err(|e| {
        error::Error::from(e).with_internal_message(format!("Error updating video with ID {raw}"))
    })?;
    Ok(success::Success::ok(ack))
}

#[delete("/deleteVideoById/{id}")]
pub async fn delete_video_by_id(
    video_service: web::Data<VideoService>,
    id: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    let raw = id.into_inner();
    let result = video_service.delete(parse_id(&raw)?).await.map_err(|e| {
        error::Error::from(e).with_internal_message(format!("Error deleting video with ID {raw}"))
    })?;

    if result.affected == 0 {
        return Err(error::Error::not_found(format!("Video with ID {raw} not found")));
    }
    Ok(success::Success::text(format!("Video with ID {raw} deleted successfully")))
}
