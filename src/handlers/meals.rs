// src/handlers/meals.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::identity::{AdminUser, CurrentUser},
    models::meal::{CreateMealPayload, Meal, MealOverview, Selection, ToggleSelectionPayload},
};

// POST /meals
#[utoipa::path(
    post,
    path = "/meals",
    tag = "Meals",
    request_body = CreateMealPayload,
    responses(
        (status = 201, description = "Refeição criada", body = Meal),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Somente admins")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn create_meal(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(payload): Json<CreateMealPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let meal = app_state
        .meal_service
        .create_meal(payload.date, payload.kind, &payload.menu_items, payload.price)
        .await?;

    Ok((StatusCode::CREATED, Json(meal)))
}

// GET /meals
#[utoipa::path(
    get,
    path = "/meals",
    tag = "Meals",
    responses(
        (status = 200, description = "Refeições ativas com a seleção do utilizador", body = Vec<MealOverview>),
        (status = 401, description = "Identidade ausente ou desconhecida")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn list_meals(
    State(app_state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<MealOverview>>, AppError> {
    let meals = app_state.meal_service.list_meals_for_user(user.id).await?;
    Ok(Json(meals))
}

// PUT /meals/{id}/selection
#[utoipa::path(
    put,
    path = "/meals/{id}/selection",
    tag = "Meals",
    request_body = ToggleSelectionPayload,
    responses(
        (status = 200, description = "Seleção gravada", body = Selection),
        (status = 400, description = "Saldo insuficiente para estornar o crédito"),
        (status = 404, description = "Refeição não encontrada"),
        (status = 422, description = "Refeição já passou do prazo de alteração")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da refeição"),
        ("x-user-id" = Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn toggle_selection(
    State(app_state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(meal_id): Path<Uuid>,
    Json(payload): Json<ToggleSelectionPayload>,
) -> Result<Json<Selection>, AppError> {
    let selection = app_state
        .meal_service
        .toggle_selection(&user, meal_id, payload.status)
        .await?;

    Ok(Json(selection))
}
