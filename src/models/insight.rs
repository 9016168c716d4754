use serde::{ Serialize, Deserialize };

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusinessObjective {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Body of `POST /api/generate`. Fields default to empty so that absent and
/// blank values fail validation the same way.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub segment: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub objective: String,
    #[serde(rename = "promptType", default)]
    pub prompt_type: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateReply {
    pub insight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Served by `GET /api/config` so browser clients can show demo messaging.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ConfigReply {
    pub demo: bool,
}

/// One generated insight held by the client store. At most one live entry
/// exists per (segment_id, prompt_type_id) pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
    pub id: String,
    pub segment_id: String,
    pub prompt_type_id: String,
    pub content: String,
    pub timestamp: String,
    pub product: String,
    pub objective: String,
}
