use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::meal::{Meal, MealKind, Selection, SelectionStatus},
};

#[derive(Clone)]
pub struct MealRepository {
    pool: PgPool,
}

impl MealRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_meal(
        &self,
        date: NaiveDate,
        kind: MealKind,
        menu_items: &[String],
        price: Decimal,
    ) -> Result<Meal, AppError> {
        sqlx::query_as::<_, Meal>(
            "INSERT INTO meals (date, kind, menu_items, price)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(date)
        .bind(kind)
        .bind(menu_items)
        .bind(price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // A tabela tem UNIQUE (date, kind); duplicata vira conflito amigável
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::MealAlreadyExists;
                }
            }
            AppError::DatabaseError(e)
        })
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Meal>, AppError> {
        let meal = sqlx::query_as::<_, Meal>("SELECT * FROM meals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(meal)
    }

    // Lista as refeições ativas em ordem de data (a grade que os cards exibem)
    pub async fn list_active(&self) -> Result<Vec<Meal>, AppError> {
        let meals = sqlx::query_as::<_, Meal>(
            "SELECT * FROM meals WHERE is_active = true ORDER BY date ASC, kind ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(meals)
    }

    // Todas as seleções de um utilizador (ausência = "attending")
    pub async fn selections_for_user(&self, user_id: Uuid) -> Result<Vec<Selection>, AppError> {
        let selections = sqlx::query_as::<_, Selection>(
            "SELECT * FROM meal_selections WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(selections)
    }

    pub async fn find_selection(
        &self,
        conn: &mut PgConnection,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> Result<Option<Selection>, AppError> {
        let selection = sqlx::query_as::<_, Selection>(
            "SELECT * FROM meal_selections WHERE user_id = $1 AND meal_id = $2",
        )
        .bind(user_id)
        .bind(meal_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(selection)
    }

    // Grava a decisão do utilizador (insert ou update, tanto faz para quem chama)
    pub async fn upsert_selection(
        &self,
        conn: &mut PgConnection,
        user_id: Uuid,
        meal_id: Uuid,
        status: SelectionStatus,
    ) -> Result<Selection, AppError> {
        let selection = sqlx::query_as::<_, Selection>(
            "INSERT INTO meal_selections (user_id, meal_id, status)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, meal_id)
             DO UPDATE SET status = EXCLUDED.status, updated_at = now()
             RETURNING *",
        )
        .bind(user_id)
        .bind(meal_id)
        .bind(status)
        .fetch_one(&mut *conn)
        .await?;

        Ok(selection)
    }
}
