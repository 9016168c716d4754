use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::insight::TokenUsage;

/// Canned insights served while demo mode is active. Keyed by prompt type id;
/// anything outside the four SWOT categories falls back to the placeholder.
static CANNED_INSIGHTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "strengths",
            "• Strong brand recognition gives this segment a familiar entry point\n• Product quality and reliability match what these customers already value\n• Existing distribution keeps the product visible where the segment shops\n• Pricing flexibility leaves room for segment-specific offers",
        ),
        (
            "weaknesses",
            "• Switching costs make this segment hesitant to leave incumbents\n• Limited awareness of the product's differentiators in this audience\n• Support and onboarding are not yet tailored to the segment's workflow\n• Perceived price premium without a clear value story",
        ),
        (
            "opportunities",
            "• Partner with voices this segment already trusts to build credibility\n• Bundle entry-level offers that lower the first-purchase barrier\n• Use segment-specific channels that competitors underinvest in\n• Turn early adopters into referral advocates with a lightweight program",
        ),
        (
            "threats",
            "• Established competitors can outspend on reach in this segment\n• Economic pressure shifts the segment toward cheaper substitutes\n• Changing platform algorithms can cut organic visibility overnight\n• A single poor experience travels fast in this community",
        ),
    ])
});

const GENERIC_INSIGHT: &str =
    "• Demo mode is active, so this is a sample insight\n• Configure a provider API key to generate live analysis\n• Selections and caching behave exactly as they do in live mode";

pub fn canned_insight(prompt_type: &str) -> &'static str {
    CANNED_INSIGHTS.get(prompt_type).copied().unwrap_or(GENERIC_INSIGHT)
}

pub fn mock_usage() -> TokenUsage {
    TokenUsage {
        prompt_tokens: 0,
        completion_tokens: 0,
        total_tokens: 120,
    }
}
