//! Candidate message drafts and refinement directives.
//!
//! Drafts are ephemeral: a generation call produces a batch, the
//! operator refines or saves individual entries, and the whole batch is
//! discarded when a new generation replaces it. Nothing here is
//! persisted directly.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Minimum number of drafts a single generation call may request.
pub const MIN_DRAFT_COUNT: u8 = 1;
/// Maximum number of drafts a single generation call may request.
pub const MAX_DRAFT_COUNT: u8 = 10;
/// Draft count used when the operator does not pick one.
pub const DEFAULT_DRAFT_COUNT: u8 = 3;

/// Characters per SMS segment (GSM-7 single-part budget).
pub const SMS_SEGMENT_CHARS: usize = 160;

/// An unsaved candidate message produced by the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub content: String,
    /// Tone/style label assigned by the generation service.
    pub tone: String,
    /// Audience description captured at generation time. A snapshot, not
    /// a live reference: later tag edits never alter existing drafts.
    pub target_audience: String,
    /// Set by the generation service on the draft it considers best.
    pub is_recommended: bool,
}

/// Closed set of rewrite instructions accepted by the refinement service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefinementDirective {
    Shorten,
    Clarify,
    MoreExciting,
    MoreFormal,
}

impl RefinementDirective {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefinementDirective::Shorten => "SHORTEN",
            RefinementDirective::Clarify => "CLARIFY",
            RefinementDirective::MoreExciting => "MORE_EXCITING",
            RefinementDirective::MoreFormal => "MORE_FORMAL",
        }
    }
}

/// Validate a requested draft count against the service bounds.
pub fn validate_draft_count(count: u8) -> Result<(), CoreError> {
    if (MIN_DRAFT_COUNT..=MAX_DRAFT_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Draft count must be between {MIN_DRAFT_COUNT} and {MAX_DRAFT_COUNT} (got {count})"
        )))
    }
}

/// Order drafts so the service's recommendations come first.
///
/// The sort is stable: relative order within the recommended and
/// non-recommended groups is preserved.
pub fn sort_recommended_first(drafts: &mut [Draft]) {
    drafts.sort_by_key(|d| !d.is_recommended);
}

/// Number of SMS segments a message body occupies.
pub fn sms_segments(content: &str) -> usize {
    content.chars().count().div_ceil(SMS_SEGMENT_CHARS).max(1)
}
