use serde_json::Value;
use tracing::debug;

/// Parsed occurrences on an OpenAI-style `text/event-stream`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// One content fragment from `choices[0].delta.content`.
    Delta(String),
    /// The `data: [DONE]` sentinel.
    Done,
}

/// Incremental parser over raw response bytes.
///
/// Network reads split the stream at arbitrary byte positions, so only
/// newline-terminated lines are consumed; an incomplete tail stays in the
/// buffer until the next `feed` completes it. A `data:` line split mid-JSON
/// is therefore re-examined later, never dropped and never parsed twice.
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();

        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.buffer.drain(..=pos).collect();
            // Multi-byte UTF-8 never contains 0x0A, so the split is clean.
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(['\n', '\r']);

            // Blank keep-alives and ":" comment lines carry no payload.
            if line.is_empty() || line.starts_with(':') {
                continue;
            }

            let Some(payload) = line.strip_prefix("data:") else {
                continue;
            };
            let payload = payload.trim();

            if payload == "[DONE]" {
                events.push(SseEvent::Done);
                continue;
            }

            match serde_json::from_str::<Value>(payload) {
                Ok(value) => {
                    if let Some(text) = value["choices"][0]["delta"]["content"].as_str() {
                        events.push(SseEvent::Delta(text.to_string()));
                    }
                }
                Err(e) => {
                    // A complete line that is not JSON is upstream garbage,
                    // not a split read; skip it.
                    debug!("Ignoring unparseable SSE line: {}", e);
                }
            }
        }

        events
    }

    /// Bytes still waiting for their newline.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}
