// src/handlers/complaints.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::identity::{AdminUser, CurrentUser},
    models::complaint::{Complaint, CreateComplaintPayload},
};

// POST /complaints/
#[utoipa::path(
    post,
    path = "/complaints/",
    tag = "Complaints",
    request_body = CreateComplaintPayload,
    responses(
        (status = 201, description = "Reclamação registrada", body = Complaint),
        (status = 400, description = "Dados inválidos")
    ),
    params(
        ("x-user-id" = uuid::Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn create_complaint(
    State(app_state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateComplaintPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let complaint = app_state
        .complaint_service
        .create_complaint(
            user.id,
            payload.category,
            &payload.description,
            payload.image_url.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(complaint)))
}

// GET /complaints/
#[utoipa::path(
    get,
    path = "/complaints/",
    tag = "Complaints",
    responses(
        (status = 200, description = "Todas as reclamações, mais recentes primeiro", body = Vec<Complaint>),
        (status = 403, description = "Somente admins")
    ),
    params(
        ("x-user-id" = uuid::Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn list_complaints(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<Complaint>>, AppError> {
    let complaints = app_state.complaint_service.list_complaints().await?;
    Ok(Json(complaints))
}
