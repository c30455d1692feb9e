use thiserror::Error;

use crate::chat::domain::transcript::ChatMessage;

#[derive(Debug, Error)]
pub enum TranscriptStoreError {
    #[error("storage io: {0}")]
    Io(String),
    #[error("storage serialization: {0}")]
    Serialization(String),
}

/// Best-effort local persistence for the widget transcript. The session
/// treats `load` errors as "start fresh" and `save` errors as log-and-move-on;
/// losing chat history is an accepted degraded mode, never a hard failure.
pub trait TranscriptStore: Send + Sync {
    fn load(&self) -> Result<Vec<ChatMessage>, TranscriptStoreError>;

    fn save(&self, messages: &[ChatMessage]) -> Result<(), TranscriptStoreError>;
}
