//! Trait seam between the session workflow and the AI text services.

use async_trait::async_trait;

use smscast_core::draft::RefinementDirective;
use smscast_core::tone::ToneKey;

use crate::api::GenAiError;
use crate::models::{DraftPayload, GenerateDraftsRequest};

/// The AI text operations the draft workflow depends on.
///
/// Implemented by [`GenAiApi`](crate::GenAiApi) over HTTP and by
/// in-memory fakes in the session tests.
#[async_trait]
pub trait DraftGenerator: Send + Sync {
    /// Produce a batch of candidate drafts for a campaign.
    async fn generate_drafts(
        &self,
        request: &GenerateDraftsRequest,
    ) -> Result<Vec<DraftPayload>, GenAiError>;

    /// Rewrite one message body per the given directive.
    async fn refine_draft(
        &self,
        content: &str,
        directive: RefinementDirective,
    ) -> Result<String, GenAiError>;

    /// Ranked tone suggestions for a campaign shape.
    async fn tone_recommendations(&self, key: &ToneKey) -> Result<Vec<String>, GenAiError>;
}

#[async_trait]
impl<T: DraftGenerator + ?Sized> DraftGenerator for std::sync::Arc<T> {
    async fn generate_drafts(
        &self,
        request: &GenerateDraftsRequest,
    ) -> Result<Vec<DraftPayload>, GenAiError> {
        (**self).generate_drafts(request).await
    }

    async fn refine_draft(
        &self,
        content: &str,
        directive: RefinementDirective,
    ) -> Result<String, GenAiError> {
        (**self).refine_draft(content, directive).await
    }

    async fn tone_recommendations(&self, key: &ToneKey) -> Result<Vec<String>, GenAiError> {
        (**self).tone_recommendations(key).await
    }
}
