use smscast_core::CoreError;
use smscast_genai::GenAiError;
use smscast_store::StoreError;

/// Failures surfaced by session operations.
///
/// Every failure is local to the operation that raised it: prior session
/// state is left untouched and the operator may retry the same action.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A precondition failed before any network call was made.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The AI text service call failed.
    #[error(transparent)]
    GenAi(#[from] GenAiError),

    /// The persistence API call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
