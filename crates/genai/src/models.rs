//! Wire types for the generation, refinement, and tone services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use smscast_core::draft::RefinementDirective;

/// Payload for `POST /generate-drafts`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateDraftsRequest {
    /// Customer's public site address; empty when no customer context is
    /// available.
    pub website_url: String,
    pub products: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub discount_rate: u8,
    /// Number of candidate drafts requested (bounded 1-10).
    pub message_count: u8,
    /// Serialized audience tag snapshot.
    pub target_audience: String,
    /// Customer's contact number; empty when unavailable.
    pub phone_number: String,
}

/// One candidate draft as returned by the generation service.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftPayload {
    /// Tone/style label (`Short`, `Urgent`, `Friendly`, ...).
    #[serde(rename = "type")]
    pub tone: String,
    pub content: String,
    /// Set on the draft the service considers its best candidate.
    #[serde(default)]
    pub is_recommended: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDraftsResponse {
    pub drafts: Vec<DraftPayload>,
}

/// Payload for `POST /refine-draft`.
#[derive(Debug, Clone, Serialize)]
pub struct RefineRequest {
    pub content: String,
    pub refinement_type: RefinementDirective,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefineResponse {
    pub content: String,
}

/// Response from `GET /tone-recommendations`, ranked best-first.
#[derive(Debug, Clone, Deserialize)]
pub struct ToneRecommendationsResponse {
    pub recommendations: Vec<String>,
}
