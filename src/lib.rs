pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod modal;
pub mod models;
pub mod navigator;
pub mod notice;
pub mod render;
pub mod state;
pub mod tracker;
pub mod ui;

pub use api::{ApiError, CalorieApi, HttpApi};
pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use tracker::Tracker;
