// src/client.rs

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{
    analytics::WastageStats,
    complaint::Complaint,
    meal::{MealOverview, Selection, SelectionStatus, ToggleSelectionPayload},
    wallet::WalletResponse,
};

// O nome do cabeçalho de identidade, igual ao do lado do servidor
const USER_ID_HEADER: &str = "x-user-id";

// O cliente tipado que a camada de apresentação usa. Endereço-base e
// identidade entram pelo construtor: nada de contexto global implícito.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    user_id: Uuid,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, user_id: Uuid) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            user_id,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    // Caminhos relativos (ex.: de imagens de reclamação) viram URLs completas
    // por concatenação com o endereço-base.
    pub fn resolve_url(&self, relative_path: &str) -> String {
        format!("{}{}", self.base_url, relative_path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, reqwest::Error> {
        self.http
            .get(self.resolve_url(path))
            .header(USER_ID_HEADER, self.user_id.to_string())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, reqwest::Error> {
        self.http
            .put(self.resolve_url(path))
            .header(USER_ID_HEADER, self.user_id.to_string())
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    // GET /analytics/wastage
    pub async fn wastage_stats(&self) -> Result<WastageStats, reqwest::Error> {
        self.get_json("/analytics/wastage").await
    }

    // GET /complaints/
    pub async fn complaints(&self) -> Result<Vec<Complaint>, reqwest::Error> {
        self.get_json("/complaints/").await
    }

    // GET /wallet/
    pub async fn wallet(&self) -> Result<WalletResponse, reqwest::Error> {
        self.get_json("/wallet/").await
    }

    // GET /meals
    pub async fn meals(&self) -> Result<Vec<MealOverview>, reqwest::Error> {
        self.get_json("/meals").await
    }

    // PUT /meals/{id}/selection (o callback de toggle dos cards)
    pub async fn set_selection(
        &self,
        meal_id: Uuid,
        status: SelectionStatus,
    ) -> Result<Selection, reqwest::Error> {
        let path = format!("/meals/{meal_id}/selection");
        self.put_json(&path, &ToggleSelectionPayload { status }).await
    }
}
