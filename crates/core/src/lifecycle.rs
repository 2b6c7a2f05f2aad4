//! Campaign lifecycle state machine.
//!
//! The console surfaces four transitions: scheduling a draft campaign
//! (guarded on having at least one saved message), reverting a scheduled
//! campaign to draft, activating, and completing. Transitions out of
//! `Active`/`Completed` back to earlier states are driven by time or an
//! external process and are not modeled here.
//!
//! Guards are plain preconditions checked before any network call; a
//! rejected transition never reaches the store.

use crate::campaign::CampaignStatus;
use crate::error::CoreError;

/// Returns `true` if `from -> to` is a transition this console surfaces.
pub fn is_reachable(from: CampaignStatus, to: CampaignStatus) -> bool {
    use CampaignStatus::*;
    matches!(
        (from, to),
        (Draft, Scheduled) | (Scheduled, Draft) | (Draft, Active) | (Scheduled, Active) | (Active, Completed)
    )
}

/// Check whether a status transition is permitted.
///
/// `saved_message_count` is the size of the campaign's saved-messages
/// collection; scheduling requires at least one saved message.
pub fn check_transition(
    from: CampaignStatus,
    to: CampaignStatus,
    saved_message_count: usize,
) -> Result<(), CoreError> {
    if !is_reachable(from, to) {
        return Err(CoreError::Conflict(format!(
            "Cannot move a {from} campaign to {to}"
        )));
    }
    if from == CampaignStatus::Draft && to == CampaignStatus::Scheduled && saved_message_count == 0
    {
        return Err(CoreError::Validation(
            "Save at least one message before scheduling the campaign".to_string(),
        ));
    }
    Ok(())
}
