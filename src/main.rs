use actix_files::Files;
use actix_web::{self, App, HttpServer, middleware::Logger, web};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::{connect_database, cors},
    middlewares::error_fallback,
    modules::{
        file_upload::{FileUploadService, UploadConfig},
        video::{repository_mysql::VideoRepositoryMySql, service::VideoService},
    },
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    let upload_config = UploadConfig::new(&ENV.upload_dir);
    tokio::fs::create_dir_all(&upload_config.upload_dir).await?;

    let video_repo = VideoRepositoryMySql::new(db_pool.clone());
    let upload_service = FileUploadService::new(upload_config.clone());
    let video_service =
        VideoService::with_dependencies(Arc::new(video_repo), Arc::new(upload_service));

    log::info!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(error_fallback())
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(web::Data::new(video_service.clone()))
            .configure(modules::video::route::configure)
            .service(Files::new(&upload_config.mount_path(), upload_config.upload_dir.clone()))
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .run()
    .await;

    db_pool.close().await;
    log::info!("Database pool closed");
    server
}
