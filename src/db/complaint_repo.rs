use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::complaint::{Complaint, ComplaintCategory},
};

#[derive(Clone)]
pub struct ComplaintRepository {
    pool: PgPool,
}

impl ComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        user_id: Uuid,
        category: ComplaintCategory,
        description: &str,
        image_url: Option<&str>,
    ) -> Result<Complaint, AppError> {
        let complaint = sqlx::query_as::<_, Complaint>(
            "INSERT INTO complaints (user_id, category, description, image_url)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(user_id)
        .bind(category)
        .bind(description)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(complaint)
    }

    // Lista completa para o painel do admin, mais recentes primeiro
    pub async fn list_all(&self) -> Result<Vec<Complaint>, AppError> {
        let complaints = sqlx::query_as::<_, Complaint>(
            "SELECT * FROM complaints ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(complaints)
    }
}
