use crate::dto::user_dto::{CreateUserPayload, UpdateUserPayload};
use crate::error::Result;
use crate::models::user::{User, UserId};
use sqlx::PgPool;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: &UserId) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, company_name, email, is_active
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, company_name, email, is_active
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Mints the identifier and inserts in one statement; the primary
    /// key makes a duplicate identifier an error rather than a second
    /// record.
    pub async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        let id = UserId::generate();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, company_name, email, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, company_name, email, is_active
            "#,
        )
        .bind(id.as_str())
        .bind(&payload.company_name)
        .bind(payload.email.unwrap_or_default())
        .bind(payload.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Partial field replace: NULL binds fall through COALESCE to the
    /// stored value. Returns None when no row matches.
    pub async fn update(&self, id: &UserId, payload: UpdateUserPayload) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                company_name = COALESCE($2, company_name),
                email = COALESCE($3, email),
                is_active = COALESCE($4, is_active)
            WHERE id = $1
            RETURNING id, company_name, email, is_active
            "#,
        )
        .bind(id.as_str())
        .bind(payload.company_name)
        .bind(payload.email)
        .bind(payload.is_active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete(&self, id: &UserId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
