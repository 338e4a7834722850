pub mod analytics_service;
pub mod complaint_service;
pub mod meal_service;
pub mod wallet_service;

pub use analytics_service::AnalyticsService;
pub use complaint_service::ComplaintService;
pub use meal_service::MealService;
pub use wallet_service::WalletService;
