// src/handlers/analytics.rs

use axum::{Json, extract::State};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::identity::AdminUser,
    models::analytics::{MonthlyEntry, WastageStats},
};

// GET /analytics/wastage
#[utoipa::path(
    get,
    path = "/analytics/wastage",
    tag = "Analytics",
    responses(
        (status = 200, description = "Agregado de desperdício calculado das seleções", body = WastageStats),
        (status = 403, description = "Somente admins")
    ),
    params(
        ("x-user-id" = uuid::Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn get_wastage_stats(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<WastageStats>, AppError> {
    let stats = app_state.analytics_service.wastage_stats().await?;
    Ok(Json(stats))
}

// GET /analytics/monthly
#[utoipa::path(
    get,
    path = "/analytics/monthly",
    tag = "Analytics",
    responses(
        (status = 200, description = "Série mensal de reclamações e comida poupada", body = Vec<MonthlyEntry>),
        (status = 403, description = "Somente admins")
    ),
    params(
        ("x-user-id" = uuid::Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn get_monthly_series(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<MonthlyEntry>>, AppError> {
    let series = app_state.analytics_service.monthly_series().await?;
    Ok(Json(series))
}
