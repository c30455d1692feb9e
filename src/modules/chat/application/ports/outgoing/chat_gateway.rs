use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Message shape the upstream gateway expects.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OutboundMessage {
    pub role: String,
    pub content: String,
}

/// Streamed occurrences after a connection is established. `Failed` is
/// terminal; no further events follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    Delta(String),
    Done,
    Failed(String),
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("gateway returned status {0}")]
    Status(u16),
}

/// Streaming LLM gateway. A successful call hands back the receiving end of
/// the delta stream; connection-level failures surface as `Err` before any
/// event is produced.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn stream_chat(
        &self,
        messages: Vec<OutboundMessage>,
    ) -> Result<mpsc::Receiver<GatewayEvent>, GatewayError>;
}
