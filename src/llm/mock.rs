use async_trait::async_trait;
use std::sync::atomic::{ AtomicUsize, Ordering };
use std::time::Duration;

use super::{ CompletionProvider, CompletionReply, CompletionRequest, ProviderError };
use crate::models::insight::TokenUsage;

/// Stand-in for the completion provider. Counts calls, optionally sleeps to
/// hold a generation in flight, and fails for prompts containing a marker.
pub struct MockProvider {
    calls: AtomicUsize,
    latency: Duration,
    fail_on: Option<String>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            latency: Duration::ZERO,
            fail_on: None,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::new()
        }
    }

    pub fn failing_on(marker: impl Into<String>) -> Self {
        Self {
            fail_on: Some(marker.into()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(
        &self,
        request: &CompletionRequest
    ) -> Result<CompletionReply, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(marker) = &self.fail_on {
            if request.prompt.contains(marker.as_str()) {
                return Err(ProviderError::Api {
                    status: 502,
                    message: "mock upstream failure".to_string(),
                });
            }
        }

        Ok(CompletionReply {
            content: format!("Mock insight for prompt: {}", request.prompt),
            usage: Some(TokenUsage {
                prompt_tokens: 40,
                completion_tokens: 60,
                total_tokens: 100,
            }),
        })
    }
}
