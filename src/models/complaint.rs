// src/models/complaint.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "complaint_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    Hygiene,
    Quality,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "complaint_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    Resolved,
}

// `image_url` é um caminho relativo; quem exibe resolve contra a base de mídia.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Complaint {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: ComplaintCategory,
    #[schema(example = "A comida estava fria no jantar de ontem.")]
    pub description: String,
    #[schema(example = "/uploads/complaints/4f2a.jpg")]
    pub image_url: Option<String>,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
}

// Dados para registrar uma reclamação
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateComplaintPayload {
    pub category: ComplaintCategory,
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,
    pub image_url: Option<String>,
}
