pub mod analytics;
pub mod complaint;
pub mod meal;
pub mod user;
pub mod wallet;
