// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Users ---
        handlers::users::create_user,
        handlers::users::get_me,

        // --- Meals ---
        handlers::meals::create_meal,
        handlers::meals::list_meals,
        handlers::meals::toggle_selection,

        // --- Wallet ---
        handlers::wallet::get_wallet,
        handlers::wallet::pay_vendor,
        handlers::wallet::withdraw,

        // --- Complaints ---
        handlers::complaints::create_complaint,
        handlers::complaints::list_complaints,

        // --- Analytics ---
        handlers::analytics::get_wastage_stats,
        handlers::analytics::get_monthly_series,
    ),
    components(
        schemas(
            // --- Users ---
            models::user::UserRole,
            models::user::User,
            models::user::CreateUserPayload,

            // --- Meals ---
            models::meal::MealKind,
            models::meal::SelectionStatus,
            models::meal::Meal,
            models::meal::Selection,
            models::meal::MealOverview,
            models::meal::CreateMealPayload,
            models::meal::ToggleSelectionPayload,

            // --- Wallet ---
            models::wallet::TransactionKind,
            models::wallet::Transaction,
            models::wallet::WalletResponse,
            models::wallet::PayVendorPayload,
            models::wallet::WithdrawPayload,
            models::wallet::TransferReceipt,

            // --- Complaints ---
            models::complaint::ComplaintCategory,
            models::complaint::ComplaintStatus,
            models::complaint::Complaint,
            models::complaint::CreateComplaintPayload,

            // --- Analytics ---
            models::analytics::WastageStats,
            models::analytics::MonthlyEntry,
        )
    ),
    tags(
        (name = "Users", description = "Contas e Identidade"),
        (name = "Meals", description = "Refeições e Seleções de Presença"),
        (name = "Wallet", description = "Carteira de Créditos e Extrato"),
        (name = "Complaints", description = "Reclamações do Refeitório"),
        (name = "Analytics", description = "Indicadores de Desperdício")
    )
)]
pub struct ApiDoc;
