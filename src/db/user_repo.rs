use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::user::{User, UserRole},
};

// O repositório de contas, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca uma conta pelo seu ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    // Cria uma nova conta no banco de dados
    pub async fn create_user(
        &self,
        email: &str,
        full_name: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, full_name, role) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(email)
        .bind(full_name)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Converte erro de violação de chave única em um erro mais amigável
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            AppError::DatabaseError(e)
        })
    }

    // Trava a linha da conta até o fim da transação (FOR UPDATE).
    // Transações concorrentes do mesmo utilizador ficam em fila aqui,
    // então ler-e-decidir sobre saldo e seleções passa a ser serializado.
    pub async fn lock_account(
        &self,
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    // Credita `amount` no saldo. Usado dentro de transações de banco,
    // sempre ao lado da linha correspondente no livro-razão.
    pub async fn credit_balance(
        &self,
        conn: &mut PgConnection,
        user_id: Uuid,
        amount: Decimal,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET wallet_balance = wallet_balance + $2 WHERE id = $1")
            .bind(user_id)
            .bind(amount)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    // Debita `amount` do saldo, mas somente se houver fundos.
    // Retorna `InsufficientFunds` quando a condição não bate.
    pub async fn try_debit_balance(
        &self,
        conn: &mut PgConnection,
        user_id: Uuid,
        amount: Decimal,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE users SET wallet_balance = wallet_balance - $2
             WHERE id = $1 AND wallet_balance >= $2",
        )
        .bind(user_id)
        .bind(amount)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::InsufficientFunds);
        }

        Ok(())
    }
}
