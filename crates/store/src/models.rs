//! Request payloads for the persistence API.

use chrono::NaiveDate;
use serde::Serialize;

use smscast_core::campaign::{CampaignForm, CampaignStatus};
use smscast_core::types::CustomerId;

/// Payload for `POST /campaigns`.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignCreate {
    pub customer_id: CustomerId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub products: Vec<String>,
    pub discount_rate: u8,
}

impl CampaignCreate {
    pub fn from_form(customer_id: CustomerId, form: &CampaignForm) -> Self {
        Self {
            customer_id,
            name: form.name.clone(),
            start_date: form.start_date,
            end_date: form.end_date,
            products: form.products.clone(),
            discount_rate: form.discount_rate,
        }
    }
}

/// Partial-update payload for `PUT /campaigns/{id}`.
///
/// Only the populated fields are serialized, so a status-only transition
/// sends exactly `{"status": ...}` and nothing else.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CampaignUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
}

impl CampaignUpdate {
    /// Patch carrying only a status change.
    pub fn status(status: CampaignStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Full field-set patch from an edit form (status untouched).
    pub fn from_form(form: &CampaignForm) -> Self {
        Self {
            name: Some(form.name.clone()),
            start_date: Some(form.start_date),
            end_date: Some(form.end_date),
            products: Some(form.products.clone()),
            discount_rate: Some(form.discount_rate),
            status: None,
        }
    }
}

/// Payload for `POST /campaigns/{id}/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct SavedMessageCreate {
    pub content: String,
    #[serde(rename = "type")]
    pub tone: String,
    pub target_audience: String,
}
