// src/services/complaint_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ComplaintRepository,
    models::complaint::{Complaint, ComplaintCategory},
};

#[derive(Clone)]
pub struct ComplaintService {
    repo: ComplaintRepository,
}

impl ComplaintService {
    pub fn new(repo: ComplaintRepository) -> Self {
        Self { repo }
    }

    pub async fn create_complaint(
        &self,
        user_id: Uuid,
        category: ComplaintCategory,
        description: &str,
        image_url: Option<&str>,
    ) -> Result<Complaint, AppError> {
        let complaint = self
            .repo
            .insert(user_id, category, description, image_url)
            .await?;

        tracing::info!("📣 Nova reclamação registrada: {:?}", complaint.category);

        Ok(complaint)
    }

    pub async fn list_complaints(&self) -> Result<Vec<Complaint>, AppError> {
        self.repo.list_all().await
    }
}
