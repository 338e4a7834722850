// src/models/user.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Vendor,
    Admin,
}

// Uma conta do refeitório. Não há campos de senha: a identidade chega
// pronta pelo cabeçalho x-user-id (fluxos de autenticação ficam fora daqui).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    #[schema(example = "aluno@campus.edu")]
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[schema(example = "150.00")]
    pub wallet_balance: Decimal,
    pub created_at: DateTime<Utc>,
}

// Dados para criação de uma nova conta
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub full_name: String,
    pub role: UserRole,
}
