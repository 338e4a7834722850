// src/services/wallet_service.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{UserRepository, WalletRepository},
    models::{
        user::{User, UserRole},
        wallet::{TransactionKind, TransferReceipt, WalletResponse},
    },
};

// Só contas com papel de vendedor podem receber pagamentos
fn require_vendor(account: Option<User>) -> Result<User, AppError> {
    account
        .filter(|v| v.role == UserRole::Vendor)
        .ok_or(AppError::VendorNotFound)
}

#[derive(Clone)]
pub struct WalletService {
    wallet_repo: WalletRepository,
    user_repo: UserRepository,
    pool: PgPool,
}

impl WalletService {
    pub fn new(wallet_repo: WalletRepository, user_repo: UserRepository, pool: PgPool) -> Self {
        Self {
            wallet_repo,
            user_repo,
            pool,
        }
    }

    // Saldo fresco + extrato. O saldo vem sempre do banco, nunca do token
    // de identidade, para refletir créditos concedidos depois do login.
    pub async fn get_wallet(&self, user_id: Uuid) -> Result<WalletResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::UnknownUser)?;

        let transactions = self.wallet_repo.transactions_for_user(user_id).await?;

        Ok(WalletResponse {
            balance: user.wallet_balance,
            transactions,
        })
    }

    // Transferência utilizador -> vendedor. Débito condicional, crédito e
    // linha no livro-razão na mesma transação de banco.
    pub async fn pay_vendor(
        &self,
        user: &User,
        vendor_id: Uuid,
        amount: Decimal,
    ) -> Result<TransferReceipt, AppError> {
        let vendor = require_vendor(self.user_repo.find_by_id(vendor_id).await?)?;

        let mut tx = self.pool.begin().await?;

        self.user_repo
            .try_debit_balance(&mut tx, user.id, amount)
            .await?;
        self.user_repo
            .credit_balance(&mut tx, vendor.id, amount)
            .await?;

        let transaction = self
            .wallet_repo
            .insert_transaction(
                &mut tx,
                user.id,
                Some(vendor.id),
                amount,
                TransactionKind::VendorPayment,
                &format!("Payment to {}", vendor.full_name),
            )
            .await?;

        tx.commit().await?;

        tracing::info!(
            "💸 Pagamento de {} para o vendedor {} ({})",
            user.id,
            vendor.id,
            amount
        );

        Ok(TransferReceipt {
            transaction_id: transaction.id,
        })
    }

    // Saque: somente vendedores, e somente com saldo.
    pub async fn withdraw(&self, user: &User, amount: Decimal) -> Result<TransferReceipt, AppError> {
        if user.role != UserRole::Vendor {
            return Err(AppError::Forbidden);
        }

        let mut tx = self.pool.begin().await?;

        self.user_repo
            .try_debit_balance(&mut tx, user.id, amount)
            .await?;

        let transaction = self
            .wallet_repo
            .insert_transaction(
                &mut tx,
                user.id,
                None,
                amount,
                TransactionKind::Withdrawal,
                "Withdrawal request",
            )
            .await?;

        tx.commit().await?;

        Ok(TransferReceipt {
            transaction_id: transaction.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn account(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: "conta@campus.edu".into(),
            full_name: "Conta de Teste".into(),
            role,
            wallet_balance: dec!(100.00),
            created_at: Utc::now(),
        }
    }

    // Pool preguiçoso: nenhuma conexão é aberta, então só os caminhos que
    // falham antes de tocar o banco podem passar por aqui.
    fn lazy_service() -> WalletService {
        let pool = PgPool::connect_lazy("postgres://localhost/refeitorio")
            .expect("URL de conexão inválida");
        WalletService::new(
            WalletRepository::new(pool.clone()),
            UserRepository::new(pool.clone()),
            pool,
        )
    }

    #[tokio::test]
    async fn test_withdraw_is_forbidden_for_non_vendors() {
        let service = lazy_service();

        for role in [UserRole::Student, UserRole::Admin] {
            let result = service.withdraw(&account(role), dec!(10.00)).await;
            assert!(matches!(result, Err(AppError::Forbidden)));
        }
    }

    #[test]
    fn test_payments_only_target_vendor_accounts() {
        assert!(matches!(
            require_vendor(None),
            Err(AppError::VendorNotFound)
        ));
        assert!(matches!(
            require_vendor(Some(account(UserRole::Student))),
            Err(AppError::VendorNotFound)
        ));
        assert!(matches!(
            require_vendor(Some(account(UserRole::Admin))),
            Err(AppError::VendorNotFound)
        ));

        let vendor = account(UserRole::Vendor);
        let accepted = require_vendor(Some(vendor.clone())).unwrap();
        assert_eq!(accepted.id, vendor.id);
    }
}
