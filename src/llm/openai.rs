use async_trait::async_trait;
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION } };
use serde::{ Deserialize, Serialize };
use std::time::Duration;

use super::{ CompletionProvider, CompletionReply, CompletionRequest, ProviderError };
use crate::models::insight::TokenUsage;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAIClient {
    http: HttpClient,
    base_url: String,
}

#[derive(Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

impl OpenAIClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        timeout: Duration
    ) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::Config("OpenAI API key is required".to_string()));
        }

        let api_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e|
                ProviderError::Config(format!("Invalid API key format: {}", e))
            )?
        );

        let http = HttpClient::builder().default_headers(headers).timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: api_url,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAIClient {
    async fn complete(
        &self,
        request: &CompletionRequest
    ) -> Result<CompletionReply, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));

        let messages = vec![
            OpenAIMessage {
                role: "system".to_string(),
                content: request.system.clone(),
            },
            OpenAIMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }
        ];

        let req = OpenAIChatRequest {
            model: request.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let resp = self.http.post(&url).json(&req).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.json::<OpenAIResponse>().await?;

        let content = body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ProviderError::Empty)?;

        Ok(CompletionReply {
            content,
            usage: body.usage,
        })
    }
}
