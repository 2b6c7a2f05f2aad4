//! Campaign entity, status enumeration, and form validation.
//!
//! A campaign is created and edited through [`CampaignForm`]; the
//! persisted [`Campaign`] comes back from the store with its id, status,
//! and creation timestamp filled in. Status transition rules live in
//! [`crate::lifecycle`].

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{CampaignId, CustomerId, Timestamp};

/// Maximum length of a campaign name in characters.
pub const MAX_CAMPAIGN_NAME_LENGTH: u64 = 200;

/// Discount rates are whole percentages.
pub const MAX_DISCOUNT_RATE: u8 = 100;

/// Default campaign window offered when creating a new campaign.
pub const DEFAULT_WINDOW_DAYS: u64 = 7;

/// Campaign lifecycle status. Wire representation is the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Active,
    Completed,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Scheduled => "Scheduled",
            CampaignStatus::Active => "Active",
            CampaignStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted campaign as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub customer_id: CustomerId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Ordered product names. Duplicates are permitted; deduplication is
    /// a display nicety, not an invariant.
    pub products: Vec<String>,
    pub discount_rate: u8,
    pub status: CampaignStatus,
    pub created_at: Timestamp,
}

impl Campaign {
    /// Campaign duration in whole days (end minus start).
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Days left until the end date; negative once the campaign is over.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }
}

/// Create/edit payload for a campaign.
///
/// Field-level rules are declared with `validator`; the cross-field date
/// rule needs context (today's date, and the original start date when
/// editing) and is checked by [`CampaignForm::check`].
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CampaignForm {
    #[validate(length(min = 1, max = 200, message = "Campaign name is required"))]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub products: Vec<String>,
    #[validate(range(max = 100, message = "Discount rate must be between 0 and 100"))]
    pub discount_rate: u8,
}

impl CampaignForm {
    /// Empty form pre-filled with the default one-week window.
    pub fn with_default_window(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            start_date: today,
            end_date: today + Days::new(DEFAULT_WINDOW_DAYS),
            products: Vec::new(),
            discount_rate: 0,
        }
    }

    /// Seed a form from a persisted campaign for editing.
    pub fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            name: campaign.name.clone(),
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            products: campaign.products.clone(),
            discount_rate: campaign.discount_rate,
        }
    }

    /// Validate the form before it is sent to the store.
    ///
    /// `existing_start` is the persisted start date when editing; pass
    /// `None` when creating. All failures are local, no call is made.
    pub fn check(
        &self,
        today: NaiveDate,
        existing_start: Option<NaiveDate>,
    ) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        if self.products.iter().any(|p| p.trim().is_empty()) {
            return Err(CoreError::Validation(
                "Product names must not be empty".to_string(),
            ));
        }
        validate_campaign_dates(self.start_date, self.end_date, today, existing_start)
    }
}

/// Check the campaign date invariant.
///
/// The end date must be strictly after the start date. A start date in
/// the past is rejected for new campaigns, but an already-persisted
/// campaign keeps its original start date valid even once it has passed
/// (existing campaigns are never retroactively invalidated).
pub fn validate_campaign_dates(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
    existing_start: Option<NaiveDate>,
) -> Result<(), CoreError> {
    if end <= start {
        return Err(CoreError::Validation(
            "End date must be strictly after the start date".to_string(),
        ));
    }
    if existing_start == Some(start) {
        return Ok(());
    }
    if start < today {
        return Err(CoreError::Validation(
            "Start date must not be in the past".to_string(),
        ));
    }
    Ok(())
}
