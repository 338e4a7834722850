// src/services/analytics_service.rs

use std::collections::BTreeMap;

use crate::{
    common::error::AppError,
    db::{AnalyticsRepository, analytics_repo::MonthCount},
    models::analytics::{KG_SAVED_PER_SKIPPED_MEAL, MonthlyEntry, WastageStats},
};

#[derive(Clone)]
pub struct AnalyticsService {
    repo: AnalyticsRepository,
}

impl AnalyticsService {
    pub fn new(repo: AnalyticsRepository) -> Self {
        Self { repo }
    }

    // O agregado que o painel do admin consome. Sem seleções, tudo zera
    // (nada de números de demonstração).
    pub async fn wastage_stats(&self) -> Result<WastageStats, AppError> {
        let (total, skipped) = self.repo.selection_counts().await?;
        Ok(WastageStats::from_counts(total, skipped))
    }

    pub async fn monthly_series(&self) -> Result<Vec<MonthlyEntry>, AppError> {
        let complaints = self.repo.complaints_per_month().await?;
        let skips = self.repo.skips_per_month().await?;
        Ok(merge_monthly(complaints, skips))
    }
}

// Junta as duas agregações numa série única ordenada por mês.
// Meses presentes em só uma das fontes entram com zero na outra.
fn merge_monthly(complaints: Vec<MonthCount>, skips: Vec<MonthCount>) -> Vec<MonthlyEntry> {
    let mut months: BTreeMap<String, (i64, i64)> = BTreeMap::new();

    for row in complaints {
        months.entry(row.month).or_default().0 = row.total;
    }
    for row in skips {
        months.entry(row.month).or_default().1 = row.total;
    }

    months
        .into_iter()
        .map(|(month, (complaints, skipped))| MonthlyEntry {
            month,
            complaints,
            food_saved_kg: skipped as f64 * KG_SAVED_PER_SKIPPED_MEAL,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(month: &str, total: i64) -> MonthCount {
        MonthCount {
            month: month.to_string(),
            total,
        }
    }

    #[test]
    fn test_wastage_stats_from_counts() {
        let stats = WastageStats::from_counts(120, 30);

        assert_eq!(stats.total_meals_served, 120);
        assert_eq!(stats.meals_skipped, 30);
        assert!((stats.participation_rate - 75.0).abs() < f64::EPSILON);
        assert!((stats.wastage_saved_kg - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wastage_stats_empty_is_all_zeros() {
        let stats = WastageStats::from_counts(0, 0);

        assert_eq!(stats, WastageStats::default());
        assert_eq!(stats.participation_rate, 0.0);
    }

    #[test]
    fn test_merge_monthly_aligns_sources_by_month() {
        let merged = merge_monthly(
            vec![month("2026-01", 4), month("2026-03", 6)],
            vec![month("2026-01", 10), month("2026-02", 20)],
        );

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].month, "2026-01");
        assert_eq!(merged[0].complaints, 4);
        assert!((merged[0].food_saved_kg - 3.0).abs() < f64::EPSILON);

        // Mês só com skips: reclamações zeram
        assert_eq!(merged[1].month, "2026-02");
        assert_eq!(merged[1].complaints, 0);
        assert!((merged[1].food_saved_kg - 6.0).abs() < f64::EPSILON);

        // Mês só com reclamações: comida poupada zera
        assert_eq!(merged[2].month, "2026-03");
        assert_eq!(merged[2].food_saved_kg, 0.0);
    }
}
