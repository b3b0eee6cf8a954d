use actix_cors::Cors;
use sqlx::{
    MySqlPool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};

use crate::{ENV, api::error};

pub async fn connect_database() -> Result<MySqlPool, error::SystemError> {
    let options = MySqlConnectOptions::new()
        .host(&ENV.mysql_host)
        .port(ENV.mysql_port)
        .username(&ENV.mysql_user)
        .password(&ENV.mysql_password)
        .database(&ENV.mysql_database);

    let pool = MySqlPoolOptions::new()
        .max_connections(ENV.db_max_connections)
        .min_connections(1)
        .acquire_slow_threshold(std::time::Duration::from_secs(3))
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Reflects any origin and allows credentials, matching what browser clients of the
/// catalog expect.
pub fn cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_, _| true)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .supports_credentials()
}
