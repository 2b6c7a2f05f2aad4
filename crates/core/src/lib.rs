//! Domain types and pure control logic for the smscast campaign console.
//!
//! Everything in this crate is IO-free: entity types, field validation,
//! the campaign lifecycle state machine, the draft edit slot, and the
//! derivations that feed the external generation and tone services.
//! Network clients live in `smscast-genai` and `smscast-store`; the
//! stateful workflow that ties them together lives in `smscast-session`.

pub mod audience;
pub mod auth;
pub mod campaign;
pub mod customer;
pub mod draft;
pub mod editor;
pub mod error;
pub mod lifecycle;
pub mod message;
pub mod tone;
pub mod types;

pub use audience::AudienceTags;
pub use auth::{StaticToken, TokenProvider};
pub use campaign::{Campaign, CampaignForm, CampaignStatus};
pub use customer::Customer;
pub use draft::{Draft, RefinementDirective};
pub use editor::EditSlot;
pub use error::CoreError;
pub use message::SavedMessage;
pub use tone::ToneKey;
pub use types::{CampaignId, CustomerId, MessageId, Timestamp};
