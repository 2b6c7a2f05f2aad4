//! Target-audience tag set.
//!
//! An ordered collection of unique free-text labels describing intended
//! recipient segments. Tags are committed explicitly (the UI adds on a
//! terminator key, never from partial input) and feed outbound requests
//! as a single joined string.

/// Fallback audience description used when no tags have been added.
///
/// Display/request-only: it is never written into the set itself.
pub const DEFAULT_AUDIENCE: &str = "General Audience";

/// Ordered set of unique (case-sensitive, exact-match) audience labels.
///
/// No operation on this type can fail; adds and removes that do not
/// apply are silent no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudienceTags {
    tags: Vec<String>,
}

impl AudienceTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label to the end of the set.
    ///
    /// Surrounding whitespace is trimmed first; empty strings and exact
    /// duplicates are ignored.
    pub fn add(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() || self.tags.iter().any(|t| t == label) {
            return;
        }
        self.tags.push(label.to_string());
    }

    /// Remove the exact match for `label`, if present.
    pub fn remove(&mut self, label: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == label) {
            self.tags.remove(pos);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.tags
    }

    /// Join the labels for an outbound request, or fall back to
    /// [`DEFAULT_AUDIENCE`] when the set is empty.
    pub fn serialize(&self) -> String {
        if self.tags.is_empty() {
            DEFAULT_AUDIENCE.to_string()
        } else {
            self.tags.join(", ")
        }
    }
}
