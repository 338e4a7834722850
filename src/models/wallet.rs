// src/models/wallet.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "transaction_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    SkipCredit,
    VendorPayment,
    AdminAdjustment,
    Withdrawal,
}

// Uma linha do livro-razão. `amount` é sempre positivo; o sinal do efeito
// depende de qual lado o utilizador ocupa (ver `signed_amount`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Transaction {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Option<Uuid>,
    #[schema(example = "50.00")]
    pub amount: Decimal,
    pub kind: TransactionKind,
    #[schema(example = "Payment to Cantina Central")]
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    // Efeito da linha sobre o saldo de `user_id`: crédito se ele recebe,
    // débito se ele envia.
    pub fn signed_amount(&self, user_id: Uuid) -> Decimal {
        if self.receiver_id == Some(user_id) {
            self.amount
        } else if self.sender_id == user_id {
            -self.amount
        } else {
            Decimal::ZERO
        }
    }
}

// O modelo de leitura da carteira: saldo + extrato (mais recentes primeiro).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WalletResponse {
    #[schema(example = "320.50")]
    pub balance: Decimal,
    pub transactions: Vec<Transaction>,
}

impl WalletResponse {
    // Invariante da carteira: o saldo é a soma com sinal do extrato completo.
    // Só vale quando `transactions` contém o histórico inteiro do utilizador.
    pub fn is_consistent(&self, user_id: Uuid) -> bool {
        let sum: Decimal = self
            .transactions
            .iter()
            .map(|tx| tx.signed_amount(user_id))
            .sum();
        sum == self.balance
    }
}

fn validate_positive(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.message = Some("O valor deve ser maior que zero.".into());
        return Err(err);
    }
    Ok(())
}

// Pagamento de um utilizador para um vendedor
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct PayVendorPayload {
    pub vendor_id: Uuid,
    #[validate(custom(function = "validate_positive"))]
    #[schema(example = "25.00")]
    pub amount: Decimal,
}

// Saque de um vendedor
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct WithdrawPayload {
    #[validate(custom(function = "validate_positive"))]
    #[schema(example = "100.00")]
    pub amount: Decimal,
}

// Recibo devolvido pelas operações de escrita na carteira
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransferReceipt {
    pub transaction_id: Uuid,
}
