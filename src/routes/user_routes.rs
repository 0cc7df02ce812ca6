use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::user_dto::{CreateUserPayload, UpdateUserPayload},
    error::{Error, Result},
    models::user::{User, UserId},
    AppState,
};

// A string that is not a well-formed identifier can never name a record,
// so it gets the same 404 as a missing one.
fn parse_user_id(raw: &str) -> Result<UserId> {
    UserId::parse(raw).ok_or_else(|| Error::NotFound("User not found".to_string()))
}

#[utoipa::path(
    get,
    path = "/api/v1/user/{id}",
    params(
        ("id" = String, Path, description = "User identifier, 24 hex characters")
    ),
    responses(
        (status = 200, description = "User found", body = Json<User>),
        (status = 404, description = "Identifier malformed or no such user")
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_user_id(&id)?;
    let user: User = state
        .user_service
        .get(&id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All users, newest first", body = Json<Vec<User>>),
        (status = 500, description = "Query failed; no partial body is emitted")
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/api/v1/user",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "User created", body = Json<User>),
        (status = 400, description = "Malformed body or invalid email"),
        (status = 500, description = "Insert failed")
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUserPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| Error::BadRequest(rejection.body_text()))?;
    payload.validate()?;
    let user = state.user_service.create(payload).await?;
    tracing::info!("Created user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/user/{id}",
    params(
        ("id" = String, Path, description = "User identifier, 24 hex characters")
    ),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "User updated", body = Json<User>),
        (status = 400, description = "Malformed body or invalid email"),
        (status = 404, description = "Identifier malformed or no such user")
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateUserPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let id = parse_user_id(&id)?;
    let Json(payload) = payload.map_err(|rejection| Error::BadRequest(rejection.body_text()))?;
    payload.validate()?;
    let user = state
        .user_service
        .update(&id, payload)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
    tracing::info!("Updated user {}", user.id);
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/v1/user/{id}",
    params(
        ("id" = String, Path, description = "User identifier, 24 hex characters")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "Identifier malformed or no such user")
    )
)]
#[axum::debug_handler]
pub async fn remove_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_user_id(&id)?;
    if !state.user_service.delete(&id).await? {
        return Err(Error::NotFound("User not found".to_string()));
    }
    tracing::info!("Deleted user {}", id);
    Ok(StatusCode::OK)
}
