// src/models/analytics.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Estimativa de desperdício evitado por refeição pulada.
pub const KG_SAVED_PER_SKIPPED_MEAL: f64 = 0.3;

// Agregado de desperdício, sempre recalculado a partir das seleções.
// Nunca é persistido.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WastageStats {
    #[schema(example = 1200)]
    pub total_meals_served: i64,
    #[schema(example = 150)]
    pub meals_skipped: i64,
    #[schema(example = 87.5)]
    pub participation_rate: f64,
    #[schema(example = 45.0)]
    pub wastage_saved_kg: f64,
}

impl WastageStats {
    pub fn from_counts(total_selections: i64, skipped: i64) -> Self {
        let participation_rate = if total_selections > 0 {
            (total_selections - skipped) as f64 / total_selections as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_meals_served: total_selections,
            meals_skipped: skipped,
            participation_rate,
            wastage_saved_kg: skipped as f64 * KG_SAVED_PER_SKIPPED_MEAL,
        }
    }
}

// Um ponto da série mensal (reclamações + comida poupada no mês).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyEntry {
    #[schema(example = "2026-08")]
    pub month: String,
    pub complaints: i64,
    #[schema(example = 12.3)]
    pub food_saved_kg: f64,
}
