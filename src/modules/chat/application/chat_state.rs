use std::sync::Arc;

use crate::chat::application::ports::outgoing::ChatGateway;

/// What the chat proxy route needs: the upstream gateway and the publishable
/// key widgets must present.
#[derive(Clone)]
pub struct ChatState {
    pub gateway: Arc<dyn ChatGateway + Send + Sync>,
    pub client_key: String,
}
