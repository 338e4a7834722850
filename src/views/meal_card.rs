// src/views/meal_card.rs

use uuid::Uuid;

use crate::models::meal::{Meal, Selection, SelectionStatus};

// O card de uma refeição: renderização puramente derivada de
// (refeição, seleção, flag de carregamento). Sem estado interno;
// erros do toggle são problema de quem fornece o callback.
pub struct MealCard {
    pub meal: Meal,
    pub selection: Option<Selection>,
    // Enquanto verdadeiro, o controle fica desabilitado para impedir
    // dois toggles em voo ao mesmo tempo.
    pub loading: bool,
}

impl MealCard {
    pub fn new(meal: Meal, selection: Option<Selection>, loading: bool) -> Self {
        Self {
            meal,
            selection,
            loading,
        }
    }

    // Sem registro de seleção, o padrão é comparecer
    pub fn status(&self) -> SelectionStatus {
        self.selection
            .as_ref()
            .map(|s| s.status)
            .unwrap_or(SelectionStatus::Attending)
    }

    pub fn is_skipped(&self) -> bool {
        self.status() == SelectionStatus::Skipped
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_skipped() {
            "Skipped (+ Credits)"
        } else {
            "Attending"
        }
    }

    pub fn toggle_disabled(&self) -> bool {
        self.loading
    }

    // O que o callback de toggle deve receber quando o controle for virado
    pub fn toggle_target(&self) -> (Uuid, SelectionStatus) {
        (self.meal.id, self.status().toggled())
    }

    pub fn price_label(&self) -> String {
        self.meal.price.to_string()
    }

    pub fn menu_items(&self) -> &[String] {
        &self.meal.menu_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meal::MealKind;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    fn meal() -> Meal {
        Meal {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            kind: MealKind::Lunch,
            price: dec!(50.00),
            menu_items: vec!["Arroz".into(), "Feijão".into()],
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn selection(meal: &Meal, status: SelectionStatus) -> Selection {
        Selection {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            meal_id: meal.id,
            status,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_label_is_skipped_iff_selection_is_skipped() {
        let m = meal();

        let skipped = MealCard::new(m.clone(), Some(selection(&m, SelectionStatus::Skipped)), false);
        assert_eq!(skipped.status_label(), "Skipped (+ Credits)");

        let attending =
            MealCard::new(m.clone(), Some(selection(&m, SelectionStatus::Attending)), false);
        assert_eq!(attending.status_label(), "Attending");
    }

    #[test]
    fn test_absent_selection_defaults_to_attending() {
        let card = MealCard::new(meal(), None, false);

        assert_eq!(card.status(), SelectionStatus::Attending);
        assert_eq!(card.status_label(), "Attending");
    }

    #[test]
    fn test_control_disabled_iff_loading_regardless_of_status() {
        let m = meal();

        for sel in [None, Some(selection(&m, SelectionStatus::Skipped))] {
            assert!(MealCard::new(m.clone(), sel.clone(), true).toggle_disabled());
            assert!(!MealCard::new(m.clone(), sel, false).toggle_disabled());
        }
    }

    #[test]
    fn test_toggle_target_flips_current_status() {
        let m = meal();
        let meal_id = m.id;

        let card = MealCard::new(m.clone(), None, false);
        assert_eq!(card.toggle_target(), (meal_id, SelectionStatus::Skipped));

        let card = MealCard::new(m.clone(), Some(selection(&m, SelectionStatus::Skipped)), false);
        assert_eq!(card.toggle_target(), (meal_id, SelectionStatus::Attending));
    }
}
