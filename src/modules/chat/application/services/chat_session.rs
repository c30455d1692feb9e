use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use crate::chat::application::ports::outgoing::{
    ChatGateway, GatewayEvent, OutboundMessage, TranscriptStore,
};
use crate::chat::application::typing::TypingQueue;
use crate::chat::domain::transcript::{greeting, ChatMessage, ChatRole};

/// Shown in place of the assistant reply when the stream fails. The user has
/// to resend manually; there is no automatic retry.
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't finish answering that. Please try sending your message again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Sending,
    Streaming,
}

#[derive(Debug, Clone)]
pub struct ChatSessionOptions {
    /// Zero applies each chunk wholesale; nonzero paces output per character.
    pub typing_delay: Duration,
    pub sound_enabled: bool,
}

impl Default for ChatSessionOptions {
    fn default() -> Self {
        Self {
            typing_delay: Duration::ZERO,
            sound_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    /// A request is already in flight; the send control stays disabled.
    Busy,
    EmptyMessage,
}

/// The chat widget's state machine: `Idle → Sending → Streaming → Idle`.
///
/// The transcript is persisted through the store after every mutation, best
/// effort. Stream failures replace the pending assistant bubble with
/// [`FALLBACK_REPLY`]; completed replies bump the unread badge while the
/// widget is closed.
pub struct ChatSession {
    gateway: Arc<dyn ChatGateway + Send + Sync>,
    store: Arc<dyn TranscriptStore + Send + Sync>,
    options: ChatSessionOptions,
    messages: Vec<ChatMessage>,
    state: SessionState,
    widget_open: bool,
    unread_count: u32,
    sound_pending: bool,
}

impl ChatSession {
    pub fn new(
        gateway: Arc<dyn ChatGateway + Send + Sync>,
        store: Arc<dyn TranscriptStore + Send + Sync>,
        options: ChatSessionOptions,
    ) -> Self {
        let messages = match store.load() {
            Ok(stored) if !stored.is_empty() => stored,
            Ok(_) => vec![greeting()],
            Err(e) => {
                warn!("Could not load stored transcript, starting fresh: {}", e);
                vec![greeting()]
            }
        };

        Self {
            gateway,
            store,
            options,
            messages,
            state: SessionState::Idle,
            widget_open: false,
            unread_count: 0,
            sound_pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }

    pub fn open_widget(&mut self) {
        self.widget_open = true;
        self.unread_count = 0;
    }

    /// Closing does not abort an in-flight stream; it only re-arms the
    /// unread badge.
    pub fn close_widget(&mut self) {
        self.widget_open = false;
    }

    /// True once per completed reply with sound enabled.
    pub fn take_pending_sound(&mut self) -> bool {
        std::mem::take(&mut self.sound_pending)
    }

    pub fn set_reaction(&mut self, index: usize, reaction: Option<String>) {
        if let Some(msg) = self.messages.get_mut(index) {
            msg.reaction = reaction;
            self.persist();
        }
    }

    pub fn toggle_pinned(&mut self, index: usize) {
        if let Some(msg) = self.messages.get_mut(index) {
            msg.pinned = !msg.pinned;
            self.persist();
        }
    }

    /// Explicit "clear chat": back to the single greeting.
    pub fn clear(&mut self) {
        self.messages = vec![greeting()];
        self.unread_count = 0;
        self.persist();
    }

    pub async fn send(&mut self, text: &str) -> Result<(), SendError> {
        if self.state != SessionState::Idle {
            return Err(SendError::Busy);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(SendError::EmptyMessage);
        }

        self.state = SessionState::Sending;
        self.messages.push(ChatMessage::user(text));
        self.persist();

        let history = self.outbound_history();
        let mut events = match self.gateway.stream_chat(history).await {
            Ok(rx) => rx,
            Err(e) => {
                warn!("Chat gateway unavailable: {}", e);
                self.finish_with_fallback();
                return Ok(());
            }
        };

        self.messages.push(ChatMessage::assistant(""));
        self.state = SessionState::Streaming;
        self.persist();

        let failed = if self.options.typing_delay.is_zero() {
            self.consume_directly(&mut events).await
        } else {
            self.consume_throttled(events).await
        };

        if failed {
            self.finish_with_fallback();
        } else {
            self.state = SessionState::Idle;
            if !self.widget_open {
                self.unread_count += 1;
            }
            if self.options.sound_enabled {
                self.sound_pending = true;
            }
            self.persist();
        }

        Ok(())
    }

    /// Applies chunks as they arrive. Returns true on stream failure.
    async fn consume_directly(&mut self, events: &mut mpsc::Receiver<GatewayEvent>) -> bool {
        while let Some(event) = events.recv().await {
            match event {
                GatewayEvent::Delta(text) => {
                    self.append_to_reply(&text);
                    self.persist();
                }
                GatewayEvent::Done => return false,
                GatewayEvent::Failed(e) => {
                    warn!("Chat stream failed: {}", e);
                    return true;
                }
            }
        }

        // Channel closed without the sentinel: the producer died mid-stream.
        true
    }

    /// Routes chunks through the typing queue so characters appear at the
    /// configured pace. The pump task is the queue's only producer; this
    /// method is its only consumer.
    async fn consume_throttled(&mut self, mut events: mpsc::Receiver<GatewayEvent>) -> bool {
        let (queue, mut chars) = TypingQueue::spawn(self.options.typing_delay, 256);

        let pump = tokio::spawn(async move {
            let mut failed = true;
            while let Some(event) = events.recv().await {
                match event {
                    GatewayEvent::Delta(text) => {
                        if queue.push_str(&text).await.is_err() {
                            break;
                        }
                    }
                    GatewayEvent::Done => {
                        failed = false;
                        break;
                    }
                    GatewayEvent::Failed(e) => {
                        warn!("Chat stream failed: {}", e);
                        break;
                    }
                }
            }
            failed
            // Dropping the queue lets the drain flush and close the output.
        });

        while let Some(c) = chars.recv().await {
            let mut buf = [0u8; 4];
            self.append_to_reply(c.encode_utf8(&mut buf));
            self.persist();
        }

        pump.await.unwrap_or(true)
    }

    fn append_to_reply(&mut self, text: &str) {
        if let Some(last) = self.messages.last_mut() {
            if last.role == ChatRole::Assistant {
                last.content.push_str(text);
            }
        }
    }

    fn finish_with_fallback(&mut self) {
        match self.messages.last_mut() {
            Some(last) if last.role == ChatRole::Assistant => {
                last.content = FALLBACK_REPLY.to_string();
            }
            _ => self.messages.push(ChatMessage::assistant(FALLBACK_REPLY)),
        }
        self.state = SessionState::Idle;
        self.persist();
    }

    fn outbound_history(&self) -> Vec<OutboundMessage> {
        self.messages
            .iter()
            .map(|m| OutboundMessage {
                role: match m.role {
                    ChatRole::User => "user".to_string(),
                    ChatRole::Assistant => "assistant".to_string(),
                },
                content: m.content.clone(),
            })
            .collect()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.messages) {
            warn!("Transcript save failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::application::ports::outgoing::{GatewayError, TranscriptStoreError};
    use crate::chat::domain::topic::Topic;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // -----------------------------
    // Mocks
    // -----------------------------

    struct ScriptedGateway {
        script: Mutex<Vec<GatewayEvent>>,
        refuse_connection: bool,
    }

    impl ScriptedGateway {
        fn replying(text_chunks: &[&str]) -> Arc<Self> {
            let mut script: Vec<GatewayEvent> = text_chunks
                .iter()
                .map(|c| GatewayEvent::Delta(c.to_string()))
                .collect();
            script.push(GatewayEvent::Done);
            Arc::new(Self {
                script: Mutex::new(script),
                refuse_connection: false,
            })
        }

        fn failing_mid_stream() -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(vec![
                    GatewayEvent::Delta("par".to_string()),
                    GatewayEvent::Failed("connection reset".to_string()),
                ]),
                refuse_connection: false,
            })
        }

        fn refusing() -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(Vec::new()),
                refuse_connection: true,
            })
        }
    }

    #[async_trait]
    impl ChatGateway for ScriptedGateway {
        async fn stream_chat(
            &self,
            _messages: Vec<OutboundMessage>,
        ) -> Result<mpsc::Receiver<GatewayEvent>, GatewayError> {
            if self.refuse_connection {
                return Err(GatewayError::Status(502));
            }

            let (tx, rx) = mpsc::channel(16);
            let script: Vec<GatewayEvent> = self.script.lock().unwrap().clone();
            tokio::spawn(async move {
                for event in script {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
            });
            Ok(rx)
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        saved: Mutex<Vec<Vec<ChatMessage>>>,
        fail_load: bool,
        fail_save: bool,
    }

    impl MemoryStore {
        fn save_count(&self) -> usize {
            self.saved.lock().unwrap().len()
        }
    }

    impl TranscriptStore for MemoryStore {
        fn load(&self) -> Result<Vec<ChatMessage>, TranscriptStoreError> {
            if self.fail_load {
                return Err(TranscriptStoreError::Io("no such file".to_string()));
            }
            Ok(self
                .saved
                .lock()
                .unwrap()
                .last()
                .cloned()
                .unwrap_or_default())
        }

        fn save(&self, messages: &[ChatMessage]) -> Result<(), TranscriptStoreError> {
            if self.fail_save {
                return Err(TranscriptStoreError::Io("disk full".to_string()));
            }
            self.saved.lock().unwrap().push(messages.to_vec());
            Ok(())
        }
    }

    fn session(
        gateway: Arc<ScriptedGateway>,
        store: Arc<MemoryStore>,
        options: ChatSessionOptions,
    ) -> ChatSession {
        ChatSession::new(gateway, store, options)
    }

    // -----------------------------
    // Tests
    // -----------------------------

    #[tokio::test]
    async fn send_accumulates_the_streamed_reply() {
        let store = Arc::new(MemoryStore::default());
        let mut s = session(
            ScriptedGateway::replying(&["Hel", "lo ", "there"]),
            Arc::clone(&store),
            ChatSessionOptions::default(),
        );
        s.open_widget();

        s.send("tell me about your projects").await.unwrap();

        let messages = s.messages();
        // greeting + user + assistant
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(messages[1].topic, Topic::Projects);
        assert_eq!(messages[2].role, ChatRole::Assistant);
        assert_eq!(messages[2].content, "Hello there");
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.unread_count(), 0);
        assert!(store.save_count() > 0);
    }

    #[tokio::test]
    async fn closed_widget_accumulates_unread_and_sound() {
        let mut s = session(
            ScriptedGateway::replying(&["hi"]),
            Arc::new(MemoryStore::default()),
            ChatSessionOptions::default(),
        );

        s.send("hello").await.unwrap();

        assert_eq!(s.unread_count(), 1);
        assert!(s.take_pending_sound());
        assert!(!s.take_pending_sound());

        s.open_widget();
        assert_eq!(s.unread_count(), 0);
    }

    #[tokio::test]
    async fn mid_stream_failure_replaces_partial_reply_with_fallback() {
        let mut s = session(
            ScriptedGateway::failing_mid_stream(),
            Arc::new(MemoryStore::default()),
            ChatSessionOptions::default(),
        );

        s.send("hello").await.unwrap();

        let last = s.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.content, FALLBACK_REPLY);
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn refused_connection_yields_fallback_reply() {
        let mut s = session(
            ScriptedGateway::refusing(),
            Arc::new(MemoryStore::default()),
            ChatSessionOptions::default(),
        );

        s.send("hello").await.unwrap();

        let last = s.messages().last().unwrap();
        assert_eq!(last.content, FALLBACK_REPLY);
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn typing_throttle_produces_identical_content() {
        let mut s = session(
            ScriptedGateway::replying(&["Hel", "lo ", "🌍"]),
            Arc::new(MemoryStore::default()),
            ChatSessionOptions {
                typing_delay: Duration::from_millis(20),
                sound_enabled: false,
            },
        );

        s.send("hi").await.unwrap();

        assert_eq!(s.messages().last().unwrap().content, "Hello 🌍");
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn unreadable_store_falls_back_to_greeting() {
        let store = Arc::new(MemoryStore {
            fail_load: true,
            ..Default::default()
        });
        let s = session(
            ScriptedGateway::replying(&["hi"]),
            store,
            ChatSessionOptions::default(),
        );

        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn save_failures_never_surface() {
        let store = Arc::new(MemoryStore {
            fail_save: true,
            ..Default::default()
        });
        let mut s = session(
            ScriptedGateway::replying(&["hi"]),
            store,
            ChatSessionOptions::default(),
        );

        // Persistence fails on every state change; the send still completes.
        s.send("hello").await.unwrap();
        assert_eq!(s.messages().last().unwrap().content, "hi");
    }

    #[tokio::test]
    async fn second_send_while_busy_is_rejected() {
        let mut s = session(
            ScriptedGateway::replying(&["hi"]),
            Arc::new(MemoryStore::default()),
            ChatSessionOptions::default(),
        );

        s.state = SessionState::Streaming;
        assert_eq!(s.send("hello").await, Err(SendError::Busy));

        s.state = SessionState::Idle;
        assert_eq!(s.send("   ").await, Err(SendError::EmptyMessage));
    }

    #[tokio::test]
    async fn clear_resets_to_the_greeting() {
        let mut s = session(
            ScriptedGateway::replying(&["hi"]),
            Arc::new(MemoryStore::default()),
            ChatSessionOptions::default(),
        );

        s.send("hello").await.unwrap();
        assert!(s.messages().len() > 1);

        s.clear();
        assert_eq!(s.messages().len(), 1);
    }

    #[tokio::test]
    async fn reactions_and_pins_are_persisted() {
        let store = Arc::new(MemoryStore::default());
        let mut s = session(
            ScriptedGateway::replying(&["hi"]),
            Arc::clone(&store),
            ChatSessionOptions::default(),
        );

        s.set_reaction(0, Some("👍".to_string()));
        s.toggle_pinned(0);

        let last_saved = store.saved.lock().unwrap().last().cloned().unwrap();
        assert_eq!(last_saved[0].reaction.as_deref(), Some("👍"));
        assert!(last_saved[0].pinned);
    }
}
