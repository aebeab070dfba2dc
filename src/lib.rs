pub mod app;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

pub use app::app;
pub use config::AppConfig;
pub use database::Database;
pub use state::AppState;
