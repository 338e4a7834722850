use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Cabeçalho de identidade ausente")]
    MissingIdentity,

    #[error("Cabeçalho de identidade inválido")]
    InvalidIdentity,

    #[error("Utilizador desconhecido")]
    UnknownUser,

    #[error("Acesso negado")]
    Forbidden,

    #[error("Refeição não encontrada")]
    MealNotFound,

    #[error("Refeição duplicada para a data e o tipo")]
    MealAlreadyExists,

    #[error("Vendedor não encontrado")]
    VendorNotFound,

    #[error("Prazo de alteração encerrado")]
    SelectionCutoff,

    #[error("Saldo insuficiente")]
    InsufficientFunds,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "This e-mail is already in use.")
            }
            AppError::MissingIdentity => {
                (StatusCode::UNAUTHORIZED, "The x-user-id header is required.")
            }
            AppError::InvalidIdentity => (
                StatusCode::BAD_REQUEST,
                "The x-user-id header is not a valid UUID.",
            ),
            AppError::UnknownUser => (
                StatusCode::UNAUTHORIZED,
                "No account matches the provided identity.",
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "You do not have access to this resource.",
            ),
            AppError::MealNotFound => (StatusCode::NOT_FOUND, "Meal not found."),
            AppError::MealAlreadyExists => (
                StatusCode::CONFLICT,
                "A meal for this date and kind already exists.",
            ),
            AppError::VendorNotFound => (StatusCode::NOT_FOUND, "Vendor not found."),
            AppError::SelectionCutoff => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Past meals can no longer be toggled.",
            ),
            AppError::InsufficientFunds => (StatusCode::BAD_REQUEST, "Insufficient funds."),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_meal_maps_to_conflict() {
        let response = AppError::MealAlreadyExists.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_business_errors_keep_their_status_codes() {
        assert_eq!(
            AppError::EmailAlreadyExists.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::SelectionCutoff.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
