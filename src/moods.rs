use crate::errors::AppError;
use crate::models::{MoodCategory, MoodRecord, NewMood};
use crate::storage::{KeyValueStore, MOODS_KEY, read_list, read_list_for_update, write_json};
use chrono::{Local, SecondsFormat};
use uuid::Uuid;

/// Records that still decode, in insertion order.
pub async fn list_moods(store: &dyn KeyValueStore) -> Result<Vec<MoodRecord>, AppError> {
    Ok(read_list(store, MOODS_KEY).await?.items)
}

/// Appends a record, stamping it with the current local time when the caller
/// did not supply one.
pub async fn add_mood(store: &dyn KeyValueStore, new: NewMood) -> Result<MoodRecord, AppError> {
    let occurred_at = new
        .occurred_at
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| Local::now().to_rfc3339_opts(SecondsFormat::Secs, false));

    let category = MoodCategory::from_label(&new.category);
    let label = (category == MoodCategory::Unrecognized).then(|| new.category.trim().to_string());

    let record = MoodRecord {
        id: Uuid::new_v4().to_string(),
        category,
        label,
        occurred_at,
        reflection: new
            .reflection
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty()),
    };

    let mut moods: Vec<MoodRecord> = read_list_for_update(store, MOODS_KEY).await?;
    moods.push(record.clone());
    write_json(store, MOODS_KEY, &moods).await?;
    Ok(record)
}

pub async fn delete_mood(store: &dyn KeyValueStore, id: &str) -> Result<bool, AppError> {
    let mut moods: Vec<MoodRecord> = read_list_for_update(store, MOODS_KEY).await?;
    let before = moods.len();
    moods.retain(|mood| mood.id != id);
    if moods.len() == before {
        return Ok(false);
    }
    write_json(store, MOODS_KEY, &moods).await?;
    Ok(true)
}
