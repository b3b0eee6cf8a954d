use crate::modules::video::handle::*;
use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(list_videos)
        .service(get_video)
        .service(create_video_with_file)
        .service(update_video_by_id)
        .service(delete_video_by_id);
}
