use crate::attachments;
use crate::error::Error;
use crate::providers::streaming::{create_client, SseSplitter};
use crate::providers::Llm;
use crate::response::Response;
use async_trait::async_trait;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, info};

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/responses";

/// Binding for the hosted OpenAI Responses API. Owns the HTTP client for
/// the duration of one invocation.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_url: String,
}

#[derive(Serialize)]
struct ResponsesRequest {
    model: String,
    input: Vec<InputMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
    stream: bool,
}

#[derive(Serialize)]
struct InputMessage {
    #[serde(rename = "type")]
    item_type: &'static str,
    role: &'static str,
    content: Vec<ContentBlock>,
}

#[derive(Serialize, Debug, PartialEq)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: &'static str,
    text: String,
}

impl ContentBlock {
    fn input_text(text: String) -> Self {
        Self {
            block_type: "input_text",
            text,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(tag = "type")]
enum StreamEvent {
    #[serde(rename = "response.created")]
    Created { response: CreatedResponse },
    #[serde(rename = "response.output_text.delta")]
    OutputTextDelta { delta: String },
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Debug)]
struct CreatedResponse {
    id: String,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: create_client(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// One user message: a text block per attachment fragment in input-path
    /// order, then exactly one block holding the raw query.
    fn build_input(input_paths: &[PathBuf], query: &str) -> Result<Vec<InputMessage>, Error> {
        let mut content: Vec<ContentBlock> = attachments::collect_fragments(input_paths)?
            .into_iter()
            .map(ContentBlock::input_text)
            .collect();
        content.push(ContentBlock::input_text(query.to_string()));

        Ok(vec![InputMessage {
            item_type: "message",
            role: "user",
            content,
        }])
    }
}

fn dispatch_event(data: &str, tx: &mpsc::UnboundedSender<Result<String, Error>>) {
    match serde_json::from_str::<StreamEvent>(data) {
        Ok(StreamEvent::Created { response }) => {
            // The response id is logged but never surfaced as the context
            // identifier; multi-turn threading has not landed yet.
            info!(response_id = %response.id, "response created");
        }
        Ok(StreamEvent::OutputTextDelta { delta }) => {
            let _ = tx.send(Ok(delta));
        }
        Ok(StreamEvent::Other) => {
            debug!(event = %data, "ignoring provider event");
        }
        Err(e) => {
            debug!(error = %e, event = %data, "unparseable provider event");
        }
    }
}

#[async_trait]
impl Llm for OpenAiProvider {
    async fn respond(
        &self,
        context: Option<&str>,
        instructions: Option<&str>,
        input_paths: &[PathBuf],
        query: &str,
    ) -> Result<Response, Error> {
        // `context` is accepted by the contract but not yet threaded into
        // the request; reserved for multi-turn support.
        let _ = context;

        let request = ResponsesRequest {
            model: self.model.clone(),
            input: Self::build_input(input_paths, query)?,
            instructions: instructions.map(str::to_string),
            stream: true,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::Api { status, body });
        }

        // Producer task: split SSE events off the byte stream and hand text
        // deltas to the consumer over the channel. A mid-stream transport
        // error travels down the same channel and surfaces on the next poll.
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut splitter = SseSplitter::new();
            let mut byte_stream = response.bytes_stream();

            while let Some(chunk) = byte_stream.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        let _ = tx.send(Err(Error::Request(e)));
                        return;
                    }
                };

                splitter.push_chunk(&chunk);
                for data in splitter.drain_events() {
                    dispatch_event(&data, &tx);
                }
            }
        });

        Ok(Response::new(
            String::new(),
            UnboundedReceiverStream::new(rx).boxed(),
        ))
    }
}
