//! HTTP client for the persistence API: campaigns, customers, and the
//! per-campaign saved-messages collection.
//!
//! All durable state lives behind this API; the console keeps only
//! in-memory session state. [`CampaignStore`] is the trait seam the
//! session workflow depends on.

pub mod api;
pub mod models;
pub mod service;

pub use api::{StoreApi, StoreError};
pub use models::{CampaignCreate, CampaignUpdate, SavedMessageCreate};
pub use service::CampaignStore;
