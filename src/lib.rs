pub mod affirmations;
pub mod aggregate;
pub mod app;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod journal;
pub mod models;
pub mod moods;
pub mod state;
pub mod storage;
pub mod ui;

pub use aggregate::{MoodMapping, aggregate_distribution, aggregate_weekly};
pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
