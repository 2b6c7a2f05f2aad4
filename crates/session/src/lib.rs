//! Stateful draft-orchestration workflow for one open campaign.
//!
//! [`CampaignSession`] is the in-memory state behind the campaign detail
//! surface: the loaded campaign and its customer context, the audience
//! tag set, the current candidate drafts, the saved-messages collection,
//! the single-draft edit slot, and the tone-recommendation cache. It is
//! generic over the two service seams ([`DraftGenerator`],
//! [`CampaignStore`]) so the control logic can be exercised without a
//! network.
//!
//! [`DraftGenerator`]: smscast_genai::DraftGenerator
//! [`CampaignStore`]: smscast_store::CampaignStore

pub mod config;
pub mod error;
pub mod session;
pub mod tone_cache;

pub use config::SessionConfig;
pub use error::SessionError;
pub use session::CampaignSession;
pub use tone_cache::ToneCache;
