use actix_web::web::Bytes;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;
use tracing::error;

use crate::chat::application::ports::outgoing::{GatewayEvent, OutboundMessage};
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const CLIENT_KEY_HEADER: &str = "X-Client-Key";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<IncomingChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct IncomingChatMessage {
    pub role: String,
    pub content: String,
}

/// Proxies the widget's chat request to the LLM gateway and re-emits the
/// reply as `text/event-stream` of delta chunks terminated by `data: [DONE]`.
/// Gated by the publishable client key, not by a user session.
#[post("/api/chat")]
pub async fn stream_chat_handler(
    req: HttpRequest,
    body: web::Json<ChatRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let provided = req
        .headers()
        .get(CLIENT_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if provided != Some(data.chat.client_key.as_str()) {
        return ApiResponse::unauthorized("INVALID_CLIENT_KEY", "Missing or invalid client key");
    }

    let body = body.into_inner();
    if body.messages.is_empty() {
        return ApiResponse::bad_request("EMPTY_MESSAGES", "At least one message is required");
    }

    let outbound: Vec<OutboundMessage> = body
        .messages
        .into_iter()
        .map(|m| OutboundMessage {
            role: m.role,
            content: m.content,
        })
        .collect();

    let events = match data.chat.gateway.stream_chat(outbound).await {
        Ok(rx) => rx,
        Err(e) => {
            error!("Chat gateway unavailable: {}", e);
            return ApiResponse::bad_gateway("GATEWAY_ERROR", "Chat gateway unavailable");
        }
    };

    let stream = ReceiverStream::new(events).map(|event| match event {
        GatewayEvent::Delta(text) => {
            let chunk = json!({"choices": [{"delta": {"content": text}}]});
            Ok(Bytes::from(format!("data: {}\n\n", chunk)))
        }
        GatewayEvent::Done => Ok(Bytes::from("data: [DONE]\n\n")),
        GatewayEvent::Failed(e) => {
            // Streaming already started; all we can do is cut the connection.
            error!("Chat stream failed mid-flight: {}", e);
            Err(actix_web::error::ErrorInternalServerError("stream failed"))
        }
    });

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    use crate::chat::application::ports::outgoing::{ChatGateway, GatewayError};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::TEST_CLIENT_KEY;

    struct ScriptedGateway {
        refuse: bool,
    }

    #[async_trait]
    impl ChatGateway for ScriptedGateway {
        async fn stream_chat(
            &self,
            _messages: Vec<OutboundMessage>,
        ) -> Result<mpsc::Receiver<GatewayEvent>, GatewayError> {
            if self.refuse {
                return Err(GatewayError::Status(503));
            }

            let (tx, rx) = mpsc::channel(8);
            tokio::spawn(async move {
                let _ = tx.send(GatewayEvent::Delta("Hel".to_string())).await;
                let _ = tx.send(GatewayEvent::Delta("lo".to_string())).await;
                let _ = tx.send(GatewayEvent::Done).await;
            });
            Ok(rx)
        }
    }

    fn chat_body() -> serde_json::Value {
        json!({"messages": [{"role": "user", "content": "hi"}]})
    }

    #[actix_web::test]
    async fn streams_deltas_and_terminates_with_done() {
        let state = TestAppStateBuilder::default()
            .with_chat_gateway(Arc::new(ScriptedGateway { refuse: false }))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(stream_chat_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .insert_header((CLIENT_KEY_HEADER, TEST_CLIENT_KEY))
            .set_json(chat_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/event-stream"
        );

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();

        assert!(text.contains(r#""content":"Hel""#));
        assert!(text.contains(r#""content":"lo""#));
        assert!(text.trim_end().ends_with("data: [DONE]"));
    }

    #[actix_web::test]
    async fn missing_client_key_is_unauthorized() {
        let state = TestAppStateBuilder::default()
            .with_chat_gateway(Arc::new(ScriptedGateway { refuse: false }))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(stream_chat_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(chat_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn wrong_client_key_is_unauthorized() {
        let state = TestAppStateBuilder::default()
            .with_chat_gateway(Arc::new(ScriptedGateway { refuse: false }))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(stream_chat_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .insert_header((CLIENT_KEY_HEADER, "guessed-key"))
            .set_json(chat_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn refused_upstream_is_bad_gateway() {
        let state = TestAppStateBuilder::default()
            .with_chat_gateway(Arc::new(ScriptedGateway { refuse: true }))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(stream_chat_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .insert_header((CLIENT_KEY_HEADER, TEST_CLIENT_KEY))
            .set_json(chat_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn empty_history_is_rejected() {
        let state = TestAppStateBuilder::default()
            .with_chat_gateway(Arc::new(ScriptedGateway { refuse: false }))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(stream_chat_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .insert_header((CLIENT_KEY_HEADER, TEST_CLIENT_KEY))
            .set_json(json!({"messages": []}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
