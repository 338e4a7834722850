// src/handlers/wallet.rs

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::identity::CurrentUser,
    models::wallet::{PayVendorPayload, TransferReceipt, WalletResponse, WithdrawPayload},
};

// GET /wallet/
#[utoipa::path(
    get,
    path = "/wallet/",
    tag = "Wallet",
    responses(
        (status = 200, description = "Saldo e extrato do utilizador", body = WalletResponse),
        (status = 401, description = "Identidade ausente ou desconhecida")
    ),
    params(
        ("x-user-id" = uuid::Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn get_wallet(
    State(app_state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<WalletResponse>, AppError> {
    let wallet = app_state.wallet_service.get_wallet(user.id).await?;
    Ok(Json(wallet))
}

// POST /wallet/pay
#[utoipa::path(
    post,
    path = "/wallet/pay",
    tag = "Wallet",
    request_body = PayVendorPayload,
    responses(
        (status = 200, description = "Pagamento efetuado", body = TransferReceipt),
        (status = 400, description = "Valor inválido ou saldo insuficiente"),
        (status = 404, description = "Vendedor não encontrado")
    ),
    params(
        ("x-user-id" = uuid::Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn pay_vendor(
    State(app_state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<PayVendorPayload>,
) -> Result<Json<TransferReceipt>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let receipt = app_state
        .wallet_service
        .pay_vendor(&user, payload.vendor_id, payload.amount)
        .await?;

    Ok(Json(receipt))
}

// POST /wallet/withdraw
#[utoipa::path(
    post,
    path = "/wallet/withdraw",
    tag = "Wallet",
    request_body = WithdrawPayload,
    responses(
        (status = 200, description = "Saque registrado", body = TransferReceipt),
        (status = 400, description = "Valor inválido ou saldo insuficiente"),
        (status = 403, description = "Somente vendedores podem sacar")
    ),
    params(
        ("x-user-id" = uuid::Uuid, Header, description = "ID do utilizador atual")
    )
)]
pub async fn withdraw(
    State(app_state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<WithdrawPayload>,
) -> Result<Json<TransferReceipt>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let receipt = app_state
        .wallet_service
        .withdraw(&user, payload.amount)
        .await?;

    Ok(Json(receipt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_pay_payload_rejects_non_positive_amounts() {
        let zero = PayVendorPayload {
            vendor_id: Uuid::new_v4(),
            amount: dec!(0),
        };
        let negative = PayVendorPayload {
            vendor_id: Uuid::new_v4(),
            amount: dec!(-5.00),
        };

        assert!(zero.validate().is_err());
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_pay_payload_accepts_positive_amounts() {
        let payload = PayVendorPayload {
            vendor_id: Uuid::new_v4(),
            amount: dec!(25.00),
        };

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_withdraw_payload_validation() {
        assert!(WithdrawPayload { amount: dec!(0.01) }.validate().is_ok());
        assert!(WithdrawPayload { amount: dec!(0) }.validate().is_err());
    }
}
