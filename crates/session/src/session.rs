//! The campaign draft-orchestration session.
//!
//! One session corresponds to one open campaign. All mutation funnels
//! through the methods here; each method is a single request/response
//! unit that checks its local preconditions before any network call and
//! leaves prior state untouched when the call fails.

use chrono::Utc;

use smscast_core::audience::AudienceTags;
use smscast_core::campaign::{Campaign, CampaignForm, CampaignStatus};
use smscast_core::customer::Customer;
use smscast_core::draft::{sort_recommended_first, validate_draft_count, Draft, RefinementDirective};
use smscast_core::editor::EditSlot;
use smscast_core::error::CoreError;
use smscast_core::lifecycle::check_transition;
use smscast_core::message::{self, SavedMessage};
use smscast_core::tone::ToneKey;

use smscast_genai::{DraftGenerator, GenerateDraftsRequest};
use smscast_store::{CampaignStore, CampaignUpdate, SavedMessageCreate};

use crate::error::SessionError;
use crate::tone_cache::ToneCache;

/// In-memory workflow state for one open campaign.
pub struct CampaignSession<G: DraftGenerator, S: CampaignStore> {
    genai: G,
    store: S,
    campaign: Campaign,
    customer: Option<Customer>,
    tags: AudienceTags,
    drafts: Vec<Draft>,
    saved: Vec<SavedMessage>,
    edit: EditSlot,
    /// Loading guard: set while a generation call is outstanding.
    generating: bool,
    tones: ToneCache,
}

impl<G: DraftGenerator, S: CampaignStore> CampaignSession<G, S> {
    /// Open a session: fetch the campaign, its customer context, and the
    /// saved-messages collection, then issue the initial tone refresh.
    ///
    /// A missing or unreachable customer degrades to an empty generation
    /// context rather than failing the whole session.
    pub async fn load(genai: G, store: S, campaign_id: &str) -> Result<Self, SessionError> {
        let campaign = store.fetch_campaign(campaign_id).await?;

        let customer = match store.fetch_customer(&campaign.customer_id).await {
            Ok(customer) => Some(customer),
            Err(e) => {
                tracing::warn!(
                    campaign_id,
                    customer_id = %campaign.customer_id,
                    error = %e,
                    "Customer context unavailable, generating without it"
                );
                None
            }
        };

        let saved = store.list_messages(campaign_id).await?;

        let mut session = Self {
            genai,
            store,
            campaign,
            customer,
            tags: AudienceTags::new(),
            drafts: Vec::new(),
            saved,
            edit: EditSlot::Idle,
            generating: false,
            tones: ToneCache::new(),
        };
        session.refresh_tones().await;
        Ok(session)
    }

    // ---- accessors ----

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Candidate drafts from the most recent successful generation.
    pub fn drafts(&self) -> &[Draft] {
        &self.drafts
    }

    /// Saved messages, newest first.
    pub fn saved_messages(&self) -> &[SavedMessage] {
        &self.saved
    }

    pub fn audience_tags(&self) -> &AudienceTags {
        &self.tags
    }

    /// Mutable access to the tag set; the set enforces its own
    /// invariants, so free mutation is safe.
    pub fn audience_tags_mut(&mut self) -> &mut AudienceTags {
        &mut self.tags
    }

    pub fn edit_slot(&self) -> &EditSlot {
        &self.edit
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Ranked tone suggestions from the freshest recommendation response.
    pub fn tone_recommendations(&self) -> &[String] {
        self.tones.recommendations()
    }

    // ---- draft generation ----

    /// Request `count` candidate drafts for the campaign.
    ///
    /// Re-entry is rejected while a generation is outstanding. On
    /// success the whole candidate list is replaced (discarding any
    /// active edit, which pointed into the old list) and recommended
    /// drafts are sorted first. On failure the previous list is kept.
    pub async fn generate(&mut self, count: u8) -> Result<&[Draft], SessionError> {
        if self.generating {
            return Err(
                CoreError::Conflict("A generation call is already in flight".to_string()).into(),
            );
        }
        validate_draft_count(count)?;

        let audience = self.tags.serialize();
        let request = GenerateDraftsRequest {
            website_url: self
                .customer
                .as_ref()
                .map(|c| c.website_url.clone())
                .unwrap_or_default(),
            products: self.campaign.products.clone(),
            start_date: self.campaign.start_date,
            end_date: self.campaign.end_date,
            discount_rate: self.campaign.discount_rate,
            message_count: count,
            target_audience: audience.clone(),
            phone_number: self
                .customer
                .as_ref()
                .and_then(|c| c.phone_number.clone())
                .unwrap_or_default(),
        };

        self.generating = true;
        let result = self.genai.generate_drafts(&request).await;
        self.generating = false;

        let payloads = result?;
        tracing::info!(
            campaign_id = %self.campaign.id,
            count = payloads.len(),
            "Generated candidate drafts"
        );

        // Each draft carries the audience snapshot as of this call;
        // later tag edits never touch it.
        let mut drafts: Vec<Draft> = payloads
            .into_iter()
            .map(|p| Draft {
                content: p.content,
                tone: p.tone,
                target_audience: audience.clone(),
                is_recommended: p.is_recommended,
            })
            .collect();
        sort_recommended_first(&mut drafts);

        self.edit = EditSlot::Idle;
        self.drafts = drafts;
        Ok(&self.drafts)
    }

    // ---- draft editing ----

    /// Start editing the draft at `index`.
    pub fn begin_edit(&mut self, index: usize) -> Result<(), SessionError> {
        self.edit.begin(index, &self.drafts)?;
        Ok(())
    }

    /// Overwrite the working buffer with operator input.
    pub fn type_edit(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.edit.set_buffer(text)?;
        Ok(())
    }

    /// Commit the working buffer back into its draft.
    pub fn commit_edit(&mut self) -> Result<(), SessionError> {
        self.edit.commit(&mut self.drafts)?;
        Ok(())
    }

    /// Discard the working buffer without touching any draft.
    pub fn cancel_edit(&mut self) -> Result<(), SessionError> {
        self.edit.cancel()?;
        Ok(())
    }

    /// Send the current working buffer through the refinement service.
    ///
    /// The buffer is locked while the call is outstanding. Success
    /// replaces the buffer with the rewrite (the operator may still
    /// hand-edit afterward); failure leaves it byte-for-byte unchanged.
    pub async fn refine(&mut self, directive: RefinementDirective) -> Result<(), SessionError> {
        let buffer = self.edit.begin_refine()?;
        match self.genai.refine_draft(&buffer, directive).await {
            Ok(content) => {
                self.edit.finish_refine(Some(content));
                Ok(())
            }
            Err(e) => {
                self.edit.finish_refine(None);
                Err(e.into())
            }
        }
    }

    // ---- saved-message reconciliation ----

    /// Promote the draft at `index` into the saved-messages collection.
    ///
    /// The candidate list is never mutated by saving, so a failed save
    /// can simply be retried. The external system treats a save as
    /// positive tone feedback for future generations; that signal rides
    /// on the create call itself.
    pub async fn save_draft(&mut self, index: usize) -> Result<&SavedMessage, SessionError> {
        let draft = self
            .drafts
            .get(index)
            .ok_or_else(|| CoreError::Validation(format!("No draft at index {index}")))?;

        let create = SavedMessageCreate {
            content: draft.content.clone(),
            tone: draft.tone.clone(),
            target_audience: draft.target_audience.clone(),
        };
        let saved = self.store.save_message(&self.campaign.id, &create).await?;
        tracing::info!(
            campaign_id = %self.campaign.id,
            message_id = %saved.id,
            "Saved draft to campaign"
        );
        message::prepend(&mut self.saved, saved);
        Ok(&self.saved[0])
    }

    /// Delete a saved message.
    ///
    /// Deletion is irreversible and also drops the style-learning signal
    /// derived from the message, so it requires explicit operator
    /// confirmation; without it no call is made.
    pub async fn delete_saved(
        &mut self,
        message_id: &str,
        confirmed: bool,
    ) -> Result<(), SessionError> {
        if !confirmed {
            return Err(CoreError::Validation(
                "Deleting a saved message requires confirmation".to_string(),
            )
            .into());
        }
        self.store
            .delete_message(&self.campaign.id, message_id)
            .await?;
        if !message::remove_by_id(&mut self.saved, message_id) {
            tracing::warn!(message_id, "Deleted message was not in the local collection");
        }
        Ok(())
    }

    // ---- lifecycle ----

    /// Move the campaign to `to`.
    ///
    /// The transition guard runs locally first; a rejected transition
    /// makes no network call. A permitted one sends a status-only patch
    /// and replaces the in-memory campaign with the server's echo, so
    /// any server-side side effects are absorbed. On transport failure
    /// the local status is unchanged.
    pub async fn transition(&mut self, to: CampaignStatus) -> Result<(), SessionError> {
        check_transition(self.campaign.status, to, self.saved.len())?;

        let patch = CampaignUpdate::status(to);
        let updated = self.store.update_campaign(&self.campaign.id, &patch).await?;
        tracing::info!(
            campaign_id = %self.campaign.id,
            from = %self.campaign.status,
            to = %updated.status,
            "Campaign status changed"
        );
        self.campaign = updated;
        Ok(())
    }

    // ---- campaign editing ----

    /// Persist edited campaign fields.
    ///
    /// Validation (including the original-start-date exemption) happens
    /// before any call. On success the in-memory campaign is replaced
    /// with the server's echo and the tone recommendations are refreshed
    /// if the campaign shape changed.
    pub async fn update_campaign(&mut self, form: &CampaignForm) -> Result<(), SessionError> {
        form.check(Utc::now().date_naive(), Some(self.campaign.start_date))?;

        let patch = CampaignUpdate::from_form(form);
        let updated = self.store.update_campaign(&self.campaign.id, &patch).await?;
        self.campaign = updated;
        self.refresh_tones().await;
        Ok(())
    }

    // ---- tone recommendations ----

    /// Refresh tone recommendations if the derived key changed.
    ///
    /// Advisory and best-effort: failures are logged and swallowed, and
    /// a response that lost the sequence race is discarded.
    pub async fn refresh_tones(&mut self) {
        let key = ToneKey::derive(&self.campaign, &self.tags.serialize());
        let Some(seq) = self.tones.issue(&key) else {
            return;
        };
        match self.genai.tone_recommendations(&key).await {
            Ok(recommendations) => {
                if !self.tones.apply(seq, recommendations) {
                    tracing::debug!(seq, "Discarded stale tone recommendation response");
                }
            }
            Err(e) => {
                tracing::warn!(
                    campaign_id = %self.campaign.id,
                    error = %e,
                    "Tone recommendation request failed, keeping previous list"
                );
            }
        }
    }
}
