use sqlx::{FromRow, PgPool};

use crate::{common::error::AppError, models::meal::SelectionStatus};

// Linha crua das agregações mensais (chave "YYYY-MM")
#[derive(Debug, FromRow)]
pub struct MonthCount {
    pub month: String,
    pub total: i64,
}

#[derive(Clone)]
pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Contagens de seleções (total, puladas). Dentro de uma transação para
    // termos um snapshot consistente dos dois números.
    pub async fn selection_counts(&self) -> Result<(i64, i64), AppError> {
        let mut tx = self.pool.begin().await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM meal_selections")
            .fetch_one(&mut *tx)
            .await?;

        let skipped: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM meal_selections WHERE status = $1")
                .bind(SelectionStatus::Skipped)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok((total, skipped))
    }

    // Reclamações por mês de criação
    pub async fn complaints_per_month(&self) -> Result<Vec<MonthCount>, AppError> {
        let rows = sqlx::query_as::<_, MonthCount>(
            r#"
            SELECT to_char(created_at, 'YYYY-MM') AS month, COUNT(*) AS total
            FROM complaints
            GROUP BY 1
            ORDER BY 1 ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // Refeições puladas por mês (mês da refeição, não o do clique)
    pub async fn skips_per_month(&self) -> Result<Vec<MonthCount>, AppError> {
        let rows = sqlx::query_as::<_, MonthCount>(
            r#"
            SELECT to_char(m.date, 'YYYY-MM') AS month, COUNT(*) AS total
            FROM meal_selections s
            JOIN meals m ON m.id = s.meal_id
            WHERE s.status = $1
            GROUP BY 1
            ORDER BY 1 ASC
            "#,
        )
        .bind(SelectionStatus::Skipped)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
