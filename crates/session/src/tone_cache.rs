//! Memoized tone-recommendation cache with latest-wins sequencing.
//!
//! Recommendation requests are advisory and the one place overlapping
//! calls are allowed, so responses carry the sequence number handed out
//! at issue time and only the latest-issued sequence may apply. A stale,
//! slow response can never overwrite a fresher one.

use smscast_core::tone::ToneKey;

#[derive(Debug, Default)]
pub struct ToneCache {
    key: Option<ToneKey>,
    recommendations: Vec<String>,
    issued: u64,
}

impl ToneCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register intent to refresh for `key`.
    ///
    /// Returns the sequence number to tag the request with, or `None`
    /// when the key matches the cached one and no request is due.
    pub fn issue(&mut self, key: &ToneKey) -> Option<u64> {
        if self.key.as_ref() == Some(key) {
            return None;
        }
        self.key = Some(key.clone());
        self.issued += 1;
        Some(self.issued)
    }

    /// Apply a response for the request tagged `seq`.
    ///
    /// Returns `false` (and changes nothing) when a newer request has
    /// been issued since.
    pub fn apply(&mut self, seq: u64, recommendations: Vec<String>) -> bool {
        if seq != self.issued {
            return false;
        }
        self.recommendations = recommendations;
        true
    }

    /// Ranked recommendations from the freshest applied response.
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// The key of the most recently issued request, if any.
    pub fn key(&self) -> Option<&ToneKey> {
        self.key.as_ref()
    }
}
