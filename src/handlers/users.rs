// src/handlers/users.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::identity::CurrentUser,
    models::user::{CreateUserPayload, User},
};

// POST /users
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Conta criada", body = User),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "E-mail já em uso")
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state
        .user_repo
        .create_user(&payload.email, &payload.full_name, payload.role)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

// GET /users/me
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "A conta da identidade injetada", body = User),
        (status = 401, description = "Identidade ausente ou desconhecida")
    ),
    params(
        ("x-user-id" = uuid::Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}
