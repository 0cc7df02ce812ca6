use crate::config::get_config;
use crate::error::Result;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

/// Builds the connection options from the individual settings; the
/// config surface exposes host/name/user/password rather than one URL.
pub fn connect_options() -> PgConnectOptions {
    let config = get_config();
    PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .database(&config.db_name)
        .username(&config.db_user)
        .password(&config.db_password)
}

/// Connects eagerly so a bad database configuration fails the process
/// at startup rather than on the first request.
pub async fn create_pool() -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect_with(connect_options())
        .await?;
    Ok(pool)
}
