use crate::errors::AppError;
use crate::models::{JournalEntry, JournalPatch, NewJournalEntry};
use crate::storage::{JOURNAL_KEY, KeyValueStore, read_list, read_list_for_update, write_json};
use chrono::{Local, SecondsFormat};
use uuid::Uuid;

const MISSING_FIELDS: &str = "please fill in both title and content";

/// Entries newest first. Entries that no longer decode are left out.
pub async fn list_entries(store: &dyn KeyValueStore) -> Result<Vec<JournalEntry>, AppError> {
    Ok(read_list(store, JOURNAL_KEY).await?.items)
}

async fn entries_for_update(store: &dyn KeyValueStore) -> Result<Vec<JournalEntry>, AppError> {
    read_list_for_update(store, JOURNAL_KEY).await
}

pub async fn create_entry(
    store: &dyn KeyValueStore,
    new: NewJournalEntry,
) -> Result<JournalEntry, AppError> {
    let title = new.title.trim();
    let content = new.content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(AppError::bad_request(MISSING_FIELDS));
    }

    let entry = JournalEntry {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        content: content.to_string(),
        mood_context: clean_optional(new.mood_context),
        created_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
    };

    let mut entries = entries_for_update(store).await?;
    entries.insert(0, entry.clone());
    write_json(store, JOURNAL_KEY, &entries).await?;
    Ok(entry)
}

pub async fn update_entry(
    store: &dyn KeyValueStore,
    id: &str,
    patch: JournalPatch,
) -> Result<JournalEntry, AppError> {
    let mut entries = entries_for_update(store).await?;
    let entry = entries
        .iter_mut()
        .find(|entry| entry.id == id)
        .ok_or_else(|| AppError::not_found(format!("journal entry {id} not found")))?;

    if let Some(title) = patch.title {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::bad_request(MISSING_FIELDS));
        }
        entry.title = title.to_string();
    }
    if let Some(content) = patch.content {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::bad_request(MISSING_FIELDS));
        }
        entry.content = content.to_string();
    }
    if patch.mood_context.is_some() {
        entry.mood_context = clean_optional(patch.mood_context);
    }

    let updated = entry.clone();
    write_json(store, JOURNAL_KEY, &entries).await?;
    Ok(updated)
}

pub async fn delete_entry(store: &dyn KeyValueStore, id: &str) -> Result<(), AppError> {
    let mut entries = entries_for_update(store).await?;
    let before = entries.len();
    entries.retain(|entry| entry.id != id);
    if entries.len() == before {
        return Err(AppError::not_found(format!("journal entry {id} not found")));
    }
    write_json(store, JOURNAL_KEY, &entries).await
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
