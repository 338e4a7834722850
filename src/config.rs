// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        AnalyticsRepository, ComplaintRepository, MealRepository, UserRepository, WalletRepository,
    },
    services::{AnalyticsService, ComplaintService, MealService, WalletService},
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    // O guard de identidade consulta contas direto no repositório
    pub user_repo: UserRepository,
    pub meal_service: MealService,
    pub wallet_service: WalletService,
    pub complaint_service: ComplaintService,
    pub analytics_service: AnalyticsService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let meal_repo = MealRepository::new(db_pool.clone());
        let wallet_repo = WalletRepository::new(db_pool.clone());
        let complaint_repo = ComplaintRepository::new(db_pool.clone());
        let analytics_repo = AnalyticsRepository::new(db_pool.clone());

        let meal_service = MealService::new(
            meal_repo,
            user_repo.clone(),
            wallet_repo.clone(),
            db_pool.clone(),
        );
        let wallet_service =
            WalletService::new(wallet_repo, user_repo.clone(), db_pool.clone());
        let complaint_service = ComplaintService::new(complaint_repo);
        let analytics_service = AnalyticsService::new(analytics_repo);

        Ok(Self {
            db_pool,
            user_repo,
            meal_service,
            wallet_service,
            complaint_service,
            analytics_service,
        })
    }
}
