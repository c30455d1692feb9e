use std::fs;
use std::path::PathBuf;

use crate::chat::application::ports::outgoing::{TranscriptStore, TranscriptStoreError};
use crate::chat::domain::transcript::ChatMessage;

/// Transcript persistence as a single JSON file, the embedded analogue of
/// the widget's local-storage slot.
pub struct JsonFileTranscriptStore {
    path: PathBuf,
}

impl JsonFileTranscriptStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TranscriptStore for JsonFileTranscriptStore {
    fn load(&self) -> Result<Vec<ChatMessage>, TranscriptStoreError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| TranscriptStoreError::Io(e.to_string()))?;

        serde_json::from_str(&raw).map_err(|e| TranscriptStoreError::Serialization(e.to_string()))
    }

    fn save(&self, messages: &[ChatMessage]) -> Result<(), TranscriptStoreError> {
        let raw = serde_json::to_string(messages)
            .map_err(|e| TranscriptStoreError::Serialization(e.to_string()))?;

        fs::write(&self.path, raw).map_err(|e| TranscriptStoreError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> (JsonFileTranscriptStore, PathBuf) {
        let path = std::env::temp_dir().join(format!("transcript-{}.json", Uuid::new_v4()));
        (JsonFileTranscriptStore::new(&path), path)
    }

    #[test]
    fn round_trip_preserves_order_and_decorations() {
        let (store, path) = temp_store();

        let mut first = ChatMessage::user("tell me about a project");
        first.reaction = Some("👍".to_string());
        let mut second = ChatMessage::assistant("sure");
        second.pinned = true;

        let messages = vec![first, second];
        store.save(&messages).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, messages);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let (store, _path) = temp_store();

        assert!(matches!(store.load(), Err(TranscriptStoreError::Io(_))));
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let (store, path) = temp_store();

        fs::write(&path, "{definitely not a transcript").unwrap();
        assert!(matches!(
            store.load(),
            Err(TranscriptStoreError::Serialization(_))
        ));

        let _ = fs::remove_file(path);
    }
}
