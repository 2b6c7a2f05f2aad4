//! Workflow tests for draft editing and the refinement pipeline.

mod common;

use assert_matches::assert_matches;
use std::sync::atomic::Ordering;

use common::{open_session, payload, FakeGenAi, FakeStore};
use smscast_core::{CoreError, RefinementDirective};
use smscast_genai::GenAiError;
use smscast_session::SessionError;

async fn session_with_drafts(
    genai: &std::sync::Arc<FakeGenAi>,
    store: &std::sync::Arc<FakeStore>,
) -> smscast_session::CampaignSession<std::sync::Arc<FakeGenAi>, std::sync::Arc<FakeStore>> {
    let mut session = open_session(genai, store).await;
    genai.script_drafts(Ok(vec![
        payload("first draft", "Short", false),
        payload("second draft", "Urgent", false),
    ]));
    session.generate(2).await.unwrap();
    session
}

// ---------------------------------------------------------------------------
// Test: begin / type / commit writes the buffer back into the draft
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_edit_commit_writes_back() {
    let genai = FakeGenAi::new();
    let store = FakeStore::new();
    let mut session = session_with_drafts(&genai, &store).await;

    session.begin_edit(1).unwrap();
    assert_eq!(session.edit_slot().buffer(), Some("second draft"));

    session.type_edit("rewritten by hand").unwrap();
    session.commit_edit().unwrap();

    assert_eq!(session.drafts()[1].content, "rewritten by hand");
    assert!(!session.edit_slot().is_editing());
}

// ---------------------------------------------------------------------------
// Test: cancel discards the buffer without touching the draft
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_edit_cancel_discards_buffer() {
    let genai = FakeGenAi::new();
    let store = FakeStore::new();
    let mut session = session_with_drafts(&genai, &store).await;

    session.begin_edit(0).unwrap();
    session.type_edit("never committed").unwrap();
    session.cancel_edit().unwrap();

    assert_eq!(session.drafts()[0].content, "first draft");
    assert!(!session.edit_slot().is_editing());
}

// ---------------------------------------------------------------------------
// Test: only one draft may be edited at a time
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_second_begin_edit_rejected() {
    let genai = FakeGenAi::new();
    let store = FakeStore::new();
    let mut session = session_with_drafts(&genai, &store).await;

    session.begin_edit(0).unwrap();
    let err = session.begin_edit(1).unwrap_err();
    assert_matches!(err, SessionError::Core(CoreError::Conflict(_)));
    assert_eq!(session.edit_slot().editing_index(), Some(0));
}

// ---------------------------------------------------------------------------
// Test: successful refinement replaces the buffer, not the draft
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_refine_replaces_buffer_only() {
    let genai = FakeGenAi::new();
    let store = FakeStore::new();
    let mut session = session_with_drafts(&genai, &store).await;

    session.begin_edit(0).unwrap();
    genai.script_refinement(Ok("first draft, but shorter".to_string()));
    session.refine(RefinementDirective::Shorten).await.unwrap();

    let (sent, directive) = genai.last_refinement_request().unwrap();
    assert_eq!(sent, "first draft");
    assert_eq!(directive, RefinementDirective::Shorten);

    assert_eq!(session.edit_slot().buffer(), Some("first draft, but shorter"));
    // The draft itself only changes on commit.
    assert_eq!(session.drafts()[0].content, "first draft");

    // The rewrite is still hand-editable afterward.
    session.type_edit("shorter, plus a manual touch").unwrap();
    session.commit_edit().unwrap();
    assert_eq!(session.drafts()[0].content, "shorter, plus a manual touch");
}

// ---------------------------------------------------------------------------
// Test: failed refinement leaves the buffer byte-for-byte unchanged
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_failed_refine_leaves_buffer_unchanged() {
    let genai = FakeGenAi::new();
    let store = FakeStore::new();
    let mut session = session_with_drafts(&genai, &store).await;

    session.begin_edit(0).unwrap();
    session.type_edit("precious manual edit").unwrap();

    genai.script_refinement(Err(GenAiError::Api {
        status: 502,
        body: "bad gateway".to_string(),
    }));
    let err = session.refine(RefinementDirective::Clarify).await.unwrap_err();
    assert_matches!(err, SessionError::GenAi(_));

    assert_eq!(session.edit_slot().buffer(), Some("precious manual edit"));
    assert!(!session.edit_slot().is_refining());
    // The slot is usable again.
    session.commit_edit().unwrap();
    assert_eq!(session.drafts()[0].content, "precious manual edit");
}

// ---------------------------------------------------------------------------
// Test: refinement without an active edit is rejected before any call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_refine_without_edit_makes_no_call() {
    let genai = FakeGenAi::new();
    let store = FakeStore::new();
    let mut session = session_with_drafts(&genai, &store).await;

    let err = session.refine(RefinementDirective::MoreFormal).await.unwrap_err();
    assert_matches!(err, SessionError::Core(CoreError::Conflict(_)));
    assert_eq!(genai.refine_calls.load(Ordering::SeqCst), 0);
}
