use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::wallet::{Transaction, TransactionKind},
};

// O extrato devolvido ao utilizador é limitado às linhas mais recentes.
const TRANSACTION_HISTORY_LIMIT: i64 = 50;

#[derive(Clone)]
pub struct WalletRepository {
    pool: PgPool,
}

impl WalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Extrato do utilizador (enviadas ou recebidas), mais recentes primeiro
    pub async fn transactions_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions
             WHERE sender_id = $1 OR receiver_id = $1
             ORDER BY timestamp DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(TRANSACTION_HISTORY_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    // Insere uma linha no livro-razão. Sempre chamado dentro da mesma
    // transação de banco que ajusta os saldos envolvidos.
    pub async fn insert_transaction(
        &self,
        conn: &mut PgConnection,
        sender_id: Uuid,
        receiver_id: Option<Uuid>,
        amount: Decimal,
        kind: TransactionKind,
        description: &str,
    ) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            "INSERT INTO transactions (sender_id, receiver_id, amount, kind, description)
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(amount)
        .bind(kind)
        .bind(description)
        .fetch_one(&mut *conn)
        .await?;

        Ok(transaction)
    }
}
