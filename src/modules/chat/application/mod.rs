pub mod chat_state;
pub mod ports;
pub mod services;
pub mod typing;

pub use chat_state::ChatState;
