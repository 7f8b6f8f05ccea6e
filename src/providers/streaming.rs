use std::time::Duration;

/// Connect timeout only; a total request timeout would cut off long streams.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Splits a raw SSE byte stream into `data:` payloads, buffering partial
/// events across chunk boundaries.
pub struct SseSplitter {
    buffer: String,
}

impl SseSplitter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Append a chunk to the buffer.
    pub fn push_chunk(&mut self, chunk: &[u8]) {
        self.buffer.push_str(&String::from_utf8_lossy(chunk));
    }

    /// Drains complete SSE events from the buffer, returning each `data:`
    /// payload (excluding the `[DONE]` sentinel) in arrival order.
    pub fn drain_events(&mut self) -> Vec<String> {
        let mut payloads = Vec::new();

        while let Some(event_end) = self.buffer.find("\n\n") {
            let event_data: String = self.buffer.drain(..event_end + 2).collect();

            for line in event_data.lines() {
                if let Some(data) = line.strip_prefix("data: ") {
                    if data == "[DONE]" {
                        continue;
                    }
                    payloads.push(data.to_string());
                }
            }
        }

        payloads
    }
}

impl Default for SseSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a reqwest client with the default connect timeout.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_event() {
        let mut splitter = SseSplitter::new();
        splitter.push_chunk(b"data: {\"text\": \"hello\"}\n\n");

        assert_eq!(splitter.drain_events(), vec!["{\"text\": \"hello\"}"]);
    }

    #[test]
    fn test_multiple_events_in_one_chunk() {
        let mut splitter = SseSplitter::new();
        splitter.push_chunk(b"data: first\n\ndata: second\n\n");

        assert_eq!(splitter.drain_events(), vec!["first", "second"]);
    }

    #[test]
    fn test_event_lines_other_than_data_ignored() {
        let mut splitter = SseSplitter::new();
        splitter.push_chunk(b"event: response.output_text.delta\ndata: payload\n\n");

        assert_eq!(splitter.drain_events(), vec!["payload"]);
    }

    #[test]
    fn test_done_sentinel_filtered() {
        let mut splitter = SseSplitter::new();
        splitter.push_chunk(b"data: hello\n\ndata: [DONE]\n\n");

        assert_eq!(splitter.drain_events(), vec!["hello"]);
    }

    #[test]
    fn test_incomplete_event_buffered() {
        let mut splitter = SseSplitter::new();
        splitter.push_chunk(b"data: partial");

        assert!(splitter.drain_events().is_empty());

        splitter.push_chunk(b" event\n\n");
        assert_eq!(splitter.drain_events(), vec!["partial event"]);
    }
}
