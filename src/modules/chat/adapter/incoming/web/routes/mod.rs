mod stream_chat;

pub use stream_chat::stream_chat_handler;
