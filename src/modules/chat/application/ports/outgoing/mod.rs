pub mod chat_gateway;
pub mod transcript_store;

pub use chat_gateway::{ChatGateway, GatewayError, GatewayEvent, OutboundMessage};
pub use transcript_store::{TranscriptStore, TranscriptStoreError};
