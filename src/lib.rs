// Backend do refeitório + a camada de apresentação tipada (cliente e views).

pub mod client;
pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod views;
