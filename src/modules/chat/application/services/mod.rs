pub mod chat_session;

pub use chat_session::{ChatSession, ChatSessionOptions, SendError, SessionState, FALLBACK_REPLY};
