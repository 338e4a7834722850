pub mod analytics;
pub mod complaints;
pub mod meals;
pub mod users;
pub mod wallet;
