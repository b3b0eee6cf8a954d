pub const UPLOAD_URL_PREFIX: &str = "video_uploads";

pub struct Env {
    pub mysql_host: String,
    pub mysql_port: u16,
    pub mysql_user: String,
    pub mysql_password: String,
    pub mysql_database: String,
    pub db_max_connections: u32,
    pub upload_dir: String,
    pub ip: String,
    pub port: u16,
}

impl Env {
    fn new() -> Self {
        let mysql_host = std::env::var("MYSQL_HOST")
            .expect("MYSQL_HOST must be set in .env file or environment variable");
        let mysql_port = std::env::var("MYSQL_PORT")
            .unwrap_or_else(|_| "3306".to_string())
            .parse::<u16>()
            .expect("MYSQL_PORT must be a valid u16 integer");
        let mysql_user = std::env::var("MYSQL_USER")
            .expect("MYSQL_USER must be set in .env file or environment variable");
        let mysql_password = std::env::var("MYSQL_PASSWORD").unwrap_or_default();
        let mysql_database = std::env::var("MYSQL_DATABASE")
            .expect("MYSQL_DATABASE must be set in .env file or environment variable");

        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .expect("DB_MAX_CONNECTIONS must be a valid u32 integer");

        let upload_dir =
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| UPLOAD_URL_PREFIX.to_string());

        let ip = std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        Env {
            mysql_host,
            mysql_port,
            mysql_user,
            mysql_password,
            mysql_database,
            db_max_connections,
            upload_dir,
            ip,
            port,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
