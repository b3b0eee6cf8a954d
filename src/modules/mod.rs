pub mod file_upload;

pub mod video {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_mysql;
    pub mod handle;
    pub mod service;
    pub mod route;
}
