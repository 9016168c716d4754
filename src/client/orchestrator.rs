use log::warn;
use std::time::Duration;

use crate::client::store::{ GenerateStatus, InsightError, InsightStore };
use crate::config::catalog::PromptType;
use crate::models::insight::{ BusinessObjective, Product, Segment };

/// Pause between bulk calls so a batch does not burst the server limiter.
const BULK_CALL_SPACING: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulkReport {
    pub completed: usize,
    pub total: usize,
}

pub async fn generate_one(
    store: &InsightStore,
    product: &Product,
    objective: &BusinessObjective,
    segment: &Segment,
    prompt_type: &PromptType
) -> Result<GenerateStatus, InsightError> {
    let prompt = prompt_type.kind.render(&segment.name, &product.name, &objective.name);
    store.generate(product, objective, segment, prompt_type.id, &prompt).await
}

/// Generate every (segment, prompt type) combination sequentially. A failed
/// combination is logged and skipped; the rest of the batch still runs.
pub async fn generate_all(
    store: &InsightStore,
    product: &Product,
    objective: &BusinessObjective,
    segments: &[Segment],
    prompt_types: &[PromptType]
) -> BulkReport {
    let total = segments.len() * prompt_types.len();
    let mut completed = 0;

    for segment in segments {
        for prompt_type in prompt_types {
            match generate_one(store, product, objective, segment, prompt_type).await {
                Ok(GenerateStatus::Completed) => {
                    completed += 1;
                }
                Ok(GenerateStatus::Skipped) => {
                    warn!(
                        "Generation already in flight, skipped {}/{}",
                        segment.id,
                        prompt_type.id
                    );
                }
                Err(e) => {
                    warn!("Failed to generate insight for {}/{}: {}", segment.id, prompt_type.id, e);
                }
            }

            tokio::time::sleep(BULK_CALL_SPACING).await;
        }
    }

    BulkReport { completed, total }
}
