pub mod http_gateway;
pub mod json_file_store;

pub use http_gateway::HttpChatGateway;
pub use json_file_store::JsonFileTranscriptStore;
