pub mod analytics_repo;
pub mod complaint_repo;
pub mod meal_repo;
pub mod user_repo;
pub mod wallet_repo;

pub use analytics_repo::AnalyticsRepository;
pub use complaint_repo::ComplaintRepository;
pub use meal_repo::MealRepository;
pub use user_repo::UserRepository;
pub use wallet_repo::WalletRepository;
