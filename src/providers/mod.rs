pub mod openai;
pub mod streaming;

use crate::catalog::{ModelInfo, ProviderFamily};
use crate::config::Secret;
use crate::error::Error;
use crate::response::Response;
use async_trait::async_trait;
use std::path::PathBuf;

/// Capability contract every provider binding satisfies: produce a streaming
/// [`Response`] from context, instructions, attachment paths, and a query.
#[async_trait]
pub trait Llm: Send + Sync {
    async fn respond(
        &self,
        context: Option<&str>,
        instructions: Option<&str>,
        input_paths: &[PathBuf],
        query: &str,
    ) -> Result<Response, Error>;
}

/// Constructs the binding for the resolved model's provider family. The
/// match is exhaustive, so a family without a binding cannot be selected.
pub fn create_llm(secret: &Secret, info: ModelInfo) -> Box<dyn Llm> {
    match info.family {
        ProviderFamily::OpenAi => Box::new(openai::OpenAiProvider::new(
            &secret.open_ai_api_key,
            info.model,
        )),
    }
}
