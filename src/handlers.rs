use crate::affirmations::affirmation_for;
use crate::dashboard::build_dashboard;
use crate::errors::AppError;
use crate::journal::{create_entry, delete_entry, list_entries, update_entry};
use crate::models::{
    AffirmationResponse, ChatRequest, ChatResponse, DashboardResponse, JournalEntry, JournalPatch,
    MoodRecord, NewJournalEntry, NewMood,
};
use crate::moods::{add_mood, delete_mood, list_moods};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use chrono::Local;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let moods = list_moods(state.store.as_ref()).await?;
    let journals = list_entries(state.store.as_ref()).await?;
    let affirmation = affirmation_for(Local::now().date_naive());
    Ok(Html(render_index(moods.len(), journals.len(), affirmation)))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let moods = list_moods(state.store.as_ref()).await?;
    let journals = list_entries(state.store.as_ref()).await?;
    Ok(Json(build_dashboard(&moods, &journals, &state.mapping)))
}

pub async fn get_moods(State(state): State<AppState>) -> Result<Json<Vec<MoodRecord>>, AppError> {
    Ok(Json(list_moods(state.store.as_ref()).await?))
}

pub async fn post_mood(
    State(state): State<AppState>,
    Json(payload): Json<NewMood>,
) -> Result<(StatusCode, Json<MoodRecord>), AppError> {
    let _guard = state.write_lock.lock().await;
    let record = add_mood(state.store.as_ref(), payload).await?;
    info!(id = %record.id, category = ?record.category, "mood logged");
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn remove_mood(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let _guard = state.write_lock.lock().await;
    if !delete_mood(state.store.as_ref(), &id).await? {
        return Err(AppError::not_found(format!("mood {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_journals(
    State(state): State<AppState>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    Ok(Json(list_entries(state.store.as_ref()).await?))
}

pub async fn post_journal(
    State(state): State<AppState>,
    Json(payload): Json<NewJournalEntry>,
) -> Result<(StatusCode, Json<JournalEntry>), AppError> {
    let _guard = state.write_lock.lock().await;
    let entry = create_entry(state.store.as_ref(), payload).await?;
    info!(id = %entry.id, "journal entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn put_journal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<JournalPatch>,
) -> Result<Json<JournalEntry>, AppError> {
    let _guard = state.write_lock.lock().await;
    Ok(Json(update_entry(state.store.as_ref(), &id, payload).await?))
}

pub async fn remove_journal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let _guard = state.write_lock.lock().await;
    delete_entry(state.store.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::bad_request("message must not be empty"));
    }

    let response = state.chat.reply(message).await;
    Ok(Json(ChatResponse { response }))
}

pub async fn get_affirmation() -> Json<AffirmationResponse> {
    let today = Local::now().date_naive();
    Json(AffirmationResponse {
        date: today.to_string(),
        text: affirmation_for(today),
    })
}
