// src/middleware/identity.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::user::{User, UserRole},
};

// O nome do nosso cabeçalho HTTP de identidade.
// Não há fluxo de autenticação aqui: a identidade chega pronta, injetada
// por quem chama (espelho do parâmetro de construtor no lado do cliente).
const USER_ID_HEADER: &str = "x-user-id";

// O middleware em si: resolve o cabeçalho contra a tabela de contas
pub async fn identity_guard(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header_value = request
        .headers()
        .get(USER_ID_HEADER)
        .ok_or(AppError::MissingIdentity)?;

    let user_id = header_value
        .to_str()
        .ok()
        .and_then(|value| Uuid::parse_str(value).ok())
        .ok_or(AppError::InvalidIdentity)?;

    let user = app_state
        .user_repo
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::UnknownUser)?;

    // Insere o utilizador nos "extensions" da requisição
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

// Extrator para obter o utilizador atual diretamente nos handlers
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AppError::MissingIdentity)
    }
}

// Variante que além de extrair, exige o papel de admin
pub struct AdminUser(pub User);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<User>()
            .cloned()
            .ok_or(AppError::MissingIdentity)?;

        if user.role != UserRole::Admin {
            return Err(AppError::Forbidden);
        }

        Ok(AdminUser(user))
    }
}
