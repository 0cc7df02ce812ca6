pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::user_service::UserService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let user_service = UserService::new(pool.clone());
        Self { pool, user_service }
    }
}
