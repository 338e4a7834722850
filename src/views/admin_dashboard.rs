// src/views/admin_dashboard.rs

use crate::{
    client::ApiClient,
    models::{analytics::WastageStats, complaint::Complaint},
};

pub const NO_COMPLAINTS_TEXT: &str = "No complaints found.";

// O estado do painel do admin: três métricas escalares + grade de reclamações.
#[derive(Debug, Default)]
pub struct AdminDashboard {
    pub stats: WastageStats,
    pub complaints: Vec<Complaint>,
    pub loaded: bool,
}

impl AdminDashboard {
    // Dispara as duas leituras em paralelo e só comita o estado quando as
    // duas terminarem (sucesso ou falha). Falha de fetch é logada e a view
    // fica com o estado padrão correspondente; sem retry, sem banner de erro.
    pub async fn load(client: &ApiClient) -> Self {
        let (stats, complaints) = tokio::join!(client.wastage_stats(), client.complaints());

        let mut view = Self::default();

        match stats {
            Ok(stats) => view.stats = stats,
            Err(e) => tracing::error!("Falha ao buscar estatísticas de desperdício: {}", e),
        }
        match complaints {
            Ok(complaints) => view.complaints = complaints,
            Err(e) => tracing::error!("Falha ao buscar reclamações: {}", e),
        }

        view.loaded = true;
        view
    }

    // --- Os três cards de resumo ---

    pub fn total_meals_served(&self) -> String {
        self.stats.total_meals_served.to_string()
    }

    pub fn meals_skipped(&self) -> String {
        self.stats.meals_skipped.to_string()
    }

    pub fn participation_label(&self) -> String {
        format!("{:.1}% Participation Rate", self.stats.participation_rate)
    }

    pub fn wastage_label(&self) -> String {
        format!("{:.1} kg", self.stats.wastage_saved_kg)
    }

    // --- Grade de reclamações ---

    // `Some(texto)` quando a grade deve mostrar o estado vazio
    pub fn empty_state(&self) -> Option<&'static str> {
        self.complaints.is_empty().then_some(NO_COMPLAINTS_TEXT)
    }

    // URL completa da imagem de uma reclamação, se houver
    pub fn image_src(&self, client: &ApiClient, complaint: &Complaint) -> Option<String> {
        complaint
            .image_url
            .as_deref()
            .map(|relative| client.resolve_url(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_wastage(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/analytics/wastage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_meals_served": 120,
                "meals_skipped": 30,
                "participation_rate": 75.0,
                "wastage_saved_kg": 9.0
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_metrics_mirror_the_stats_payload_exactly() {
        let server = MockServer::start().await;
        mount_wastage(&server).await;
        Mock::given(method("GET"))
            .and(path("/complaints/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), Uuid::new_v4());
        let view = AdminDashboard::load(&client).await;

        assert!(view.loaded);
        assert_eq!(view.total_meals_served(), "120");
        assert_eq!(view.meals_skipped(), "30");
        assert_eq!(view.participation_label(), "75.0% Participation Rate");
        assert_eq!(view.wastage_label(), "9.0 kg");
    }

    #[tokio::test]
    async fn test_empty_state_iff_no_complaints() {
        let server = MockServer::start().await;
        mount_wastage(&server).await;
        Mock::given(method("GET"))
            .and(path("/complaints/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": Uuid::new_v4(),
                "user_id": Uuid::new_v4(),
                "category": "hygiene",
                "description": "Mesa suja no almoço.",
                "image_url": null,
                "status": "pending",
                "created_at": "2026-08-20T10:00:00Z"
            }])))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), Uuid::new_v4());
        let view = AdminDashboard::load(&client).await;

        assert_eq!(view.complaints.len(), 1);
        assert_eq!(view.empty_state(), None);

        let empty = AdminDashboard::default();
        assert_eq!(empty.empty_state(), Some(NO_COMPLAINTS_TEXT));
    }

    #[tokio::test]
    async fn test_failed_fetches_fall_back_to_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/analytics/wastage"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/complaints/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), Uuid::new_v4());
        let view = AdminDashboard::load(&client).await;

        // A view comita mesmo assim, com os padrões
        assert!(view.loaded);
        assert_eq!(view.stats, WastageStats::default());
        assert!(view.complaints.is_empty());
        assert_eq!(view.empty_state(), Some(NO_COMPLAINTS_TEXT));
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_the_successful_half() {
        let server = MockServer::start().await;
        mount_wastage(&server).await;
        Mock::given(method("GET"))
            .and(path("/complaints/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), Uuid::new_v4());
        let view = AdminDashboard::load(&client).await;

        assert_eq!(view.total_meals_served(), "120");
        assert!(view.complaints.is_empty());
    }
}
