//! HTTP client for the AI text services behind the campaign console:
//! draft generation, draft refinement, and tone recommendations.
//!
//! - [`GenAiApi`] — thin JSON-over-HTTP client, one method per endpoint.
//! - [`DraftGenerator`] — the trait seam the session workflow depends
//!   on, so orchestration logic can be exercised against fakes.
//! - [`models`] — request/response wire types.

pub mod api;
pub mod models;
pub mod service;

pub use api::{GenAiApi, GenAiError};
pub use models::{
    DraftPayload, GenerateDraftsRequest, GenerateDraftsResponse, RefineRequest, RefineResponse,
    ToneRecommendationsResponse,
};
pub use service::DraftGenerator;
