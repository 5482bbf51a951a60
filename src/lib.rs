pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod games;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
