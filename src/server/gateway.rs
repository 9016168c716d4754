use log::error;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::llm::{ CompletionProvider, CompletionRequest, ProviderError };
use crate::models::insight::{ GenerateReply, GenerateRequest };
use crate::server::demo;
use crate::server::limiter::{ FixedWindowLimiter, RateDecision };

const SYSTEM_INSTRUCTION: &str =
    "You are a strategic marketing analyst. Provide clear, actionable insights for SWOT analysis. \
Format your response with bullet points or numbered lists when appropriate. \
Be specific and practical in your recommendations. \
Keep responses concise but comprehensive (3-5 key points).";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Rate limit exceeded. Try again later.")]
    RateLimited {
        reset_at_ms: i64,
    },
    #[error("Failed to generate insight. Check configuration and retry.")]
    Provider(#[source] ProviderError),
}

pub struct InsightGateway {
    limiter: FixedWindowLimiter,
    provider: Option<Arc<dyn CompletionProvider>>,
    model: String,
    demo_mode: bool,
    demo_delay: Duration,
}

impl InsightGateway {
    pub fn new(
        limiter: FixedWindowLimiter,
        provider: Option<Arc<dyn CompletionProvider>>,
        model: String,
        demo_mode: bool,
        demo_delay: Duration
    ) -> Self {
        Self {
            limiter,
            provider,
            model,
            demo_mode,
            demo_delay,
        }
    }

    pub async fn generate(
        &self,
        request: &GenerateRequest,
        client_identifier: &str
    ) -> Result<GenerateReply, GatewayError> {
        // Rate limit is evaluated before field validation.
        if let RateDecision::Limited { reset_at_ms } = self.limiter.check(client_identifier) {
            return Err(GatewayError::RateLimited { reset_at_ms });
        }

        if
            request.prompt.trim().is_empty() ||
            request.segment.trim().is_empty() ||
            request.product.trim().is_empty() ||
            request.objective.trim().is_empty() ||
            request.prompt_type.trim().is_empty()
        {
            return Err(GatewayError::MissingFields);
        }

        if self.demo_mode {
            // Simulated provider latency.
            tokio::time::sleep(self.demo_delay).await;
            return Ok(GenerateReply {
                insight: demo::canned_insight(&request.prompt_type).to_string(),
                usage: Some(demo::mock_usage()),
            });
        }

        let provider = self.provider
            .as_ref()
            .ok_or_else(|| {
                GatewayError::Provider(
                    ProviderError::Config("no completion provider configured".to_string())
                )
            })?;

        let completion = CompletionRequest {
            system: SYSTEM_INSTRUCTION.to_string(),
            prompt: request.prompt.clone(),
            model: self.model.clone(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        match provider.complete(&completion).await {
            Ok(reply) =>
                Ok(GenerateReply {
                    insight: reply.content,
                    usage: reply.usage,
                }),
            Err(e) => {
                error!("Insight generation failed: {}", e);
                Err(GatewayError::Provider(e))
            }
        }
    }
}
