// src/services/meal_service.rs

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{MealRepository, UserRepository, WalletRepository},
    models::{
        meal::{Meal, MealKind, MealOverview, Selection, SelectionStatus},
        user::User,
        wallet::TransactionKind,
    },
};

// Refeições datadas antes de `today` estão fechadas para alteração
fn selection_locked(meal_date: NaiveDate, today: NaiveDate) -> bool {
    meal_date < today
}

// O que o toggle faz com o saldo. Regravar o status vigente não mexe em nada,
// então um segundo "skip" do mesmo utilizador nunca gera um segundo crédito.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CreditMove {
    Grant,
    Revoke,
}

fn credit_move(previous: SelectionStatus, requested: SelectionStatus) -> Option<CreditMove> {
    if previous == requested {
        return None;
    }
    match requested {
        SelectionStatus::Skipped => Some(CreditMove::Grant),
        SelectionStatus::Attending => Some(CreditMove::Revoke),
    }
}

#[derive(Clone)]
pub struct MealService {
    meal_repo: MealRepository,
    user_repo: UserRepository,
    wallet_repo: WalletRepository,
    pool: PgPool,
}

impl MealService {
    pub fn new(
        meal_repo: MealRepository,
        user_repo: UserRepository,
        wallet_repo: WalletRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            meal_repo,
            user_repo,
            wallet_repo,
            pool,
        }
    }

    pub async fn create_meal(
        &self,
        date: NaiveDate,
        kind: MealKind,
        menu_items: &[String],
        price: Decimal,
    ) -> Result<Meal, AppError> {
        self.meal_repo.create_meal(date, kind, menu_items, price).await
    }

    // A grade de refeições com a decisão do próprio utilizador anexada.
    // Quem não tem registro aparece com `selection: None` (= attending).
    pub async fn list_meals_for_user(&self, user_id: Uuid) -> Result<Vec<MealOverview>, AppError> {
        let meals = self.meal_repo.list_active().await?;
        let mut selections: HashMap<Uuid, Selection> = self
            .meal_repo
            .selections_for_user(user_id)
            .await?
            .into_iter()
            .map(|s| (s.meal_id, s))
            .collect();

        Ok(meals
            .into_iter()
            .map(|meal| {
                let selection = selections.remove(&meal.id);
                MealOverview { meal, selection }
            })
            .collect())
    }

    // O caminho de escrita do toggle. Regras:
    //   - refeições com data anterior a hoje não podem mais ser alteradas (cutoff);
    //   - attending -> skipped credita `meal.price` como skip_credit;
    //   - skipped -> attending estorna o crédito (exige saldo);
    //   - repetir o status atual é um no-op que só regrava a seleção.
    // Seleção, saldo e livro-razão mudam na mesma transação de banco.
    pub async fn toggle_selection(
        &self,
        user: &User,
        meal_id: Uuid,
        status: SelectionStatus,
    ) -> Result<Selection, AppError> {
        let meal = self
            .meal_repo
            .find_by_id(meal_id)
            .await?
            .ok_or(AppError::MealNotFound)?;

        if selection_locked(meal.date, Utc::now().date_naive()) {
            return Err(AppError::SelectionCutoff);
        }

        // --- INÍCIO DA TRANSAÇÃO ---
        let mut tx = self.pool.begin().await?;

        // Serializa toggles concorrentes do mesmo utilizador: sem a trava,
        // dois "skips" simultâneos leem ambos a seleção antiga e creditam duas vezes.
        self.user_repo.lock_account(&mut tx, user.id).await?;

        let previous = self
            .meal_repo
            .find_selection(&mut tx, user.id, meal_id)
            .await?
            .map(|s| s.status)
            .unwrap_or(SelectionStatus::Attending);

        let selection = self
            .meal_repo
            .upsert_selection(&mut tx, user.id, meal_id, status)
            .await?;

        match credit_move(previous, status) {
            Some(CreditMove::Grant) => {
                // Crédito por liberar a refeição
                self.user_repo
                    .credit_balance(&mut tx, user.id, meal.price)
                    .await?;
                self.wallet_repo
                    .insert_transaction(
                        &mut tx,
                        user.id,
                        Some(user.id),
                        meal.price,
                        TransactionKind::SkipCredit,
                        &format!("Credit for skipping {} on {}", meal.kind, meal.date),
                    )
                    .await?;
            }
            Some(CreditMove::Revoke) => {
                // Estorno do crédito concedido no skip.
                // Se falhar aqui, o upsert acima sofre rollback junto.
                self.user_repo
                    .try_debit_balance(&mut tx, user.id, meal.price)
                    .await?;
                self.wallet_repo
                    .insert_transaction(
                        &mut tx,
                        user.id,
                        None,
                        meal.price,
                        TransactionKind::SkipCredit,
                        &format!("Reversal of skip credit for {} on {}", meal.kind, meal.date),
                    )
                    .await?;
            }
            None => {}
        }

        tx.commit().await?;
        // --- FIM DA TRANSAÇÃO ---

        tracing::info!(
            "Seleção atualizada: utilizador={} refeição={} status={:?}",
            user.id,
            meal_id,
            status
        );

        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_closes_exactly_at_yesterday() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();

        assert!(selection_locked(today.pred_opt().unwrap(), today));
        assert!(!selection_locked(today, today));
        assert!(!selection_locked(today.succ_opt().unwrap(), today));
    }

    #[test]
    fn test_repeated_skip_never_grants_a_second_credit() {
        // Com os toggles serializados, o segundo "skip" concorrente enxerga
        // a seleção já em Skipped e não pode mexer no saldo.
        assert_eq!(
            credit_move(SelectionStatus::Skipped, SelectionStatus::Skipped),
            None
        );
        assert_eq!(
            credit_move(SelectionStatus::Attending, SelectionStatus::Attending),
            None
        );
    }

    #[test]
    fn test_credit_follows_the_status_change() {
        assert_eq!(
            credit_move(SelectionStatus::Attending, SelectionStatus::Skipped),
            Some(CreditMove::Grant)
        );
        assert_eq!(
            credit_move(SelectionStatus::Skipped, SelectionStatus::Attending),
            Some(CreditMove::Revoke)
        );
    }
}
