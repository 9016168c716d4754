use chrono::Utc;
use serde::Deserialize;
use std::sync::atomic::{ AtomicBool, AtomicU32, Ordering };
use std::sync::{ Mutex, MutexGuard };
use thiserror::Error;
use uuid::Uuid;

use crate::models::insight::{
    BusinessObjective,
    GenerateRequest,
    InsightResponse,
    Product,
    Segment,
    TokenUsage,
};

/// Rough per-request figure used for the client-side cost estimate.
pub const ESTIMATED_COST_PER_REQUEST: f64 = 0.0002;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("Rate limit exceeded. Please wait {seconds_left} seconds before trying again.")]
    RateLimited {
        seconds_left: i64,
    },
    #[error("{message}")]
    Server {
        message: String,
    },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateStatus {
    /// The insight was generated and stored.
    Completed,
    /// Another generation was already in flight; this call was dropped.
    Skipped,
}

#[derive(Clone, Copy, Debug)]
pub struct UsageStats {
    pub remaining_requests: u32,
    pub total_requests: u32,
    pub estimated_cost: f64,
}

#[derive(Default)]
struct StoreState {
    responses: Vec<InsightResponse>,
    error: Option<String>,
}

/// Lenient reply shape: older gateway builds used `content` where current
/// ones use `insight`.
#[derive(Deserialize)]
struct ReplyBody {
    insight: Option<String>,
    content: Option<String>,
    #[allow(dead_code)]
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct ErrorReply {
    error: Option<String>,
}

#[derive(Deserialize)]
struct ConfigBody {
    demo: bool,
}

/// In-memory collection of generated insights for one page session.
///
/// Generation is single-flight for the whole store: a `generate` call made
/// while another is outstanding is dropped. The quota counters are a local
/// mirror for display only; the server-side limiter is authoritative.
pub struct InsightStore {
    http: reqwest::Client,
    base_url: String,
    state: Mutex<StoreState>,
    in_flight: AtomicBool,
    total_requests: AtomicU32,
    remaining_requests: AtomicU32,
}

impl InsightStore {
    pub fn new(base_url: impl Into<String>, rate_limit: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            state: Mutex::new(StoreState::default()),
            in_flight: AtomicBool::new(false),
            total_requests: AtomicU32::new(0),
            remaining_requests: AtomicU32::new(rate_limit),
        }
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub async fn generate(
        &self,
        product: &Product,
        objective: &BusinessObjective,
        segment: &Segment,
        prompt_type_id: &str,
        prompt: &str
    ) -> Result<GenerateStatus, InsightError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Ok(GenerateStatus::Skipped);
        }

        self.state().error = None;

        let result = self.generate_inner(product, objective, segment, prompt_type_id, prompt).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => Ok(GenerateStatus::Completed),
            Err(err) => {
                self.state().error = Some(err.to_string());
                Err(err)
            }
        }
    }

    async fn generate_inner(
        &self,
        product: &Product,
        objective: &BusinessObjective,
        segment: &Segment,
        prompt_type_id: &str,
        prompt: &str
    ) -> Result<(), InsightError> {
        let request = GenerateRequest {
            prompt: prompt.to_string(),
            segment: segment.name.clone(),
            product: product.name.clone(),
            objective: objective.name.clone(),
            prompt_type: prompt_type_id.to_string(),
        };

        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                let reset_ms = response
                    .headers()
                    .get("x-ratelimit-reset")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<i64>().ok())
                    .unwrap_or_else(|| Utc::now().timestamp_millis() + 60_000);
                let seconds_left = (((reset_ms - Utc::now().timestamp_millis()) as f64) /
                    1000.0).ceil() as i64;
                return Err(InsightError::RateLimited {
                    seconds_left: seconds_left.max(0),
                });
            }

            let message = response
                .json::<ErrorReply>().await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| "Failed to generate insight".to_string());
            return Err(InsightError::Server { message });
        }

        let body = response.json::<ReplyBody>().await?;
        let content = body.insight
            .or(body.content)
            .unwrap_or_else(|| "No insight generated".to_string());

        let insight = InsightResponse {
            id: Uuid::new_v4().to_string(),
            segment_id: segment.id.clone(),
            prompt_type_id: prompt_type_id.to_string(),
            content,
            timestamp: Utc::now().to_rfc3339(),
            product: product.name.clone(),
            objective: objective.name.clone(),
        };

        {
            let mut state = self.state();
            // Upsert: a regenerated pair replaces its previous entry.
            state.responses.retain(|r| {
                !(r.segment_id == segment.id && r.prompt_type_id == prompt_type_id)
            });
            state.responses.push(insight);
        }

        self.total_requests.fetch_add(1, Ordering::SeqCst);
        let _ = self.remaining_requests.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |v| {
            Some(v.saturating_sub(1))
        });

        Ok(())
    }

    /// Client-visible demo flag from `GET /api/config`. Messaging only.
    pub async fn fetch_server_config(&self) -> Result<bool, InsightError> {
        let url = format!("{}/api/config", self.base_url.trim_end_matches('/'));
        let body = self.http.get(&url).send().await?.json::<ConfigBody>().await?;
        Ok(body.demo)
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn responses(&self) -> Vec<InsightResponse> {
        self.state().responses.clone()
    }

    pub fn response_count(&self) -> usize {
        self.state().responses.len()
    }

    pub fn response_by_keys(
        &self,
        segment_id: &str,
        prompt_type_id: &str
    ) -> Option<InsightResponse> {
        self.state()
            .responses.iter()
            .find(|r| r.segment_id == segment_id && r.prompt_type_id == prompt_type_id)
            .cloned()
    }

    pub fn last_error(&self) -> Option<String> {
        self.state().error.clone()
    }

    pub fn clear_error(&self) {
        self.state().error = None;
    }

    /// Drops all cached responses and any stored error. Usage counters are
    /// deliberately left untouched.
    pub fn clear_responses(&self) {
        let mut state = self.state();
        state.responses.clear();
        state.error = None;
    }

    pub fn usage(&self) -> UsageStats {
        let total = self.total_requests.load(Ordering::SeqCst);
        UsageStats {
            remaining_requests: self.remaining_requests.load(Ordering::SeqCst),
            total_requests: total,
            estimated_cost: (total as f64) * ESTIMATED_COST_PER_REQUEST,
        }
    }
}
