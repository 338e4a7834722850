//src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use std::env;
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use refeitorio::config::AppState;
use refeitorio::docs::ApiDoc;
use refeitorio::handlers;
use refeitorio::middleware::identity::identity_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Criação de conta é pública; todo o resto exige a identidade injetada
    let account_routes = Router::new().route("/", post(handlers::users::create_user));

    let me_routes = Router::new()
        .route("/me", get(handlers::users::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            identity_guard,
        ));

    let meal_routes = Router::new()
        .route(
            "/",
            post(handlers::meals::create_meal).get(handlers::meals::list_meals),
        )
        .route("/{id}/selection", put(handlers::meals::toggle_selection))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            identity_guard,
        ));

    let wallet_routes = Router::new()
        .route("/", get(handlers::wallet::get_wallet))
        .route("/pay", post(handlers::wallet::pay_vendor))
        .route("/withdraw", post(handlers::wallet::withdraw))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            identity_guard,
        ));

    let complaint_routes = Router::new()
        .route(
            "/",
            post(handlers::complaints::create_complaint).get(handlers::complaints::list_complaints),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            identity_guard,
        ));

    let analytics_routes = Router::new()
        .route("/wastage", get(handlers::analytics::get_wastage_stats))
        .route("/monthly", get(handlers::analytics::get_monthly_series))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            identity_guard,
        ));

    // Combina tudo no router principal.
    // Os caminhos são exatamente os que o ApiClient concatena no endereço-base.
    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/users", account_routes)
        .nest("/users", me_routes)
        .nest("/meals", meal_routes)
        .nest("/wallet", wallet_routes)
        .nest("/complaints", complaint_routes)
        .nest("/analytics", analytics_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
