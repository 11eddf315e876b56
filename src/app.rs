use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/moods", get(handlers::get_moods).post(handlers::post_mood))
        .route("/api/moods/:id", delete(handlers::remove_mood))
        .route("/api/journals", get(handlers::get_journals).post(handlers::post_journal))
        .route(
            "/api/journals/:id",
            put(handlers::put_journal).delete(handlers::remove_journal),
        )
        .route("/api/chat", post(handlers::chat))
        .route("/api/affirmation", get(handlers::get_affirmation))
        .with_state(state)
}
