use async_trait::async_trait;
use futures::StreamExt;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::chat::application::ports::outgoing::{
    ChatGateway, GatewayError, GatewayEvent, OutboundMessage,
};
use crate::chat::domain::sse::{SseEvent, SseParser};
use crate::shared::config::ChatConfig;

/// Streaming client for the hosted LLM gateway. Sends the full message
/// history, reads the SSE response incrementally and forwards content deltas
/// over a channel.
pub struct HttpChatGateway {
    client: reqwest::Client,
    config: ChatConfig,
}

impl HttpChatGateway {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn stream_chat(
        &self,
        messages: Vec<OutboundMessage>,
    ) -> Result<mpsc::Receiver<GatewayEvent>, GatewayError> {
        let body = json!({
            "model": self.config.model,
            "messages": messages,
            "stream": true,
        });

        let response = self
            .client
            .post(&self.config.gateway_url)
            .bearer_auth(&self.config.gateway_api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Chat gateway refused the request: {}", status);
            return Err(GatewayError::Status(status.as_u16()));
        }

        let (tx, rx) = mpsc::channel(32);

        tokio::spawn(async move {
            let mut parser = SseParser::new();
            let mut stream = response.bytes_stream();

            while let Some(chunk) = stream.next().await {
                let chunk = match chunk {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        let _ = tx.send(GatewayEvent::Failed(e.to_string())).await;
                        return;
                    }
                };

                for event in parser.feed(&chunk) {
                    let out = match event {
                        SseEvent::Delta(text) => GatewayEvent::Delta(text),
                        SseEvent::Done => GatewayEvent::Done,
                    };
                    let done = out == GatewayEvent::Done;
                    if tx.send(out).await.is_err() {
                        // Receiver dropped; stop reading upstream.
                        return;
                    }
                    if done {
                        return;
                    }
                }
            }

            // Upstream closed without the sentinel.
            debug!("Chat gateway stream ended without [DONE]");
            let _ = tx
                .send(GatewayEvent::Failed("stream ended early".to_string()))
                .await;
        });

        Ok(rx)
    }
}
