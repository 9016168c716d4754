pub mod mock;
pub mod openai;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::cli::Args;
use crate::models::insight::TokenUsage;
use self::openai::OpenAIClient;

#[derive(Clone, Debug)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Clone, Debug)]
pub struct CompletionReply {
    pub content: String,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {status}: {message}")]
    Api {
        status: u16,
        message: String,
    },
    #[error("provider returned no completion choices")]
    Empty,
    #[error("provider configuration error: {0}")]
    Config(String),
}

/// The single upstream dependency of the gateway. Implementations must be
/// treated as slow and fallible.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        request: &CompletionRequest
    ) -> Result<CompletionReply, ProviderError>;
}

pub fn new_provider(args: &Args) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
    let client = OpenAIClient::new(
        args.openai_api_key.clone(),
        args.chat_base_url.clone(),
        Duration::from_secs(args.provider_timeout_secs)
    )?;
    Ok(Arc::new(client))
}
