//! Tone/style labels and the recommendation request key.
//!
//! The tone-recommendation service ranks suggested labels for a campaign
//! shape. [`ToneKey`] captures exactly the inputs that shape depends on;
//! the session re-issues a recommendation request only when the derived
//! key changes.

use crate::campaign::Campaign;

/// Baseline tone labels the generation service assigns.
///
/// Labels stay free-form strings on the wire; these constants only name
/// the well-known set.
pub const TONE_SHORT: &str = "Short";
pub const TONE_URGENT: &str = "Urgent";
pub const TONE_FRIENDLY: &str = "Friendly";

/// The well-known tone labels, in the order the service produces them.
pub const BASELINE_TONES: &[&str] = &[TONE_SHORT, TONE_URGENT, TONE_FRIENDLY];

/// Inputs the tone-recommendation service keys on.
///
/// Two equal keys describe the same campaign shape; the recommendation
/// cache compares keys to decide whether a refresh is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneKey {
    pub discount_rate: u8,
    /// Campaign duration in whole days.
    pub duration_days: i64,
    /// Product names joined with `", "`.
    pub products: String,
    /// Serialized audience tag snapshot.
    pub audience: String,
}

impl ToneKey {
    /// Derive the request key from a campaign and an audience snapshot.
    pub fn derive(campaign: &Campaign, audience: &str) -> Self {
        Self {
            discount_rate: campaign.discount_rate,
            duration_days: campaign.duration_days(),
            products: campaign.products.join(", "),
            audience: audience.to_string(),
        }
    }
}
