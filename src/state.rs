use crate::aggregate::MoodMapping;
use crate::chat::ChatClient;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    /// Serializes read-modify-write cycles against the store.
    pub write_lock: Arc<Mutex<()>>,
    pub chat: ChatClient,
    pub mapping: MoodMapping,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, chat: ChatClient, mapping: MoodMapping) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
            chat,
            mapping,
        }
    }
}
