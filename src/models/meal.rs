// src/models/meal.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "meal_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MealKind {
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "selection_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    Attending,
    Skipped,
}

impl std::fmt::Display for MealKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MealKind::Breakfast => "breakfast",
            MealKind::Lunch => "lunch",
            MealKind::Dinner => "dinner",
        };
        f.write_str(label)
    }
}

impl SelectionStatus {
    pub fn toggled(self) -> Self {
        match self {
            SelectionStatus::Attending => SelectionStatus::Skipped,
            SelectionStatus::Skipped => SelectionStatus::Attending,
        }
    }
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Meal {
    pub id: Uuid,
    #[schema(value_type = String, format = Date, example = "2026-08-24")]
    pub date: NaiveDate,
    pub kind: MealKind,
    #[schema(example = "50.00")]
    pub price: Decimal,
    #[schema(example = json!(["Arroz", "Feijão", "Salada"]))]
    pub menu_items: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// A decisão de presença de um utilizador para uma refeição.
// A ausência de registro equivale a "attending".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Selection {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meal_id: Uuid,
    pub status: SelectionStatus,
    pub updated_at: DateTime<Utc>,
}

// Refeição + a seleção do próprio utilizador (se houver), como a listagem devolve.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MealOverview {
    #[serde(flatten)]
    pub meal: Meal,
    pub selection: Option<Selection>,
}

fn validate_not_negative(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("O preço não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// Dados para criação de uma refeição (somente admin)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMealPayload {
    #[schema(value_type = String, format = Date, example = "2026-08-24")]
    pub date: NaiveDate,
    pub kind: MealKind,
    #[validate(length(min = 1, message = "O cardápio precisa de ao menos um item."))]
    pub menu_items: Vec<String>,
    #[validate(custom(function = "validate_not_negative"))]
    #[schema(example = "50.00")]
    pub price: Decimal,
}

// Corpo do toggle de presença
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ToggleSelectionPayload {
    pub status: SelectionStatus,
}
