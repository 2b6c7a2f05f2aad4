//! Shared fakes and fixtures for the session workflow tests.
//!
//! `FakeGenAi` and `FakeStore` serve scripted responses from per-endpoint
//! queues and count calls, so tests can assert both what the workflow did
//! and what it deliberately did not do. An exhausted queue answers with a
//! 500 so an unscripted call fails loudly instead of hanging the test.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use smscast_core::campaign::{Campaign, CampaignStatus};
use smscast_core::customer::Customer;
use smscast_core::draft::RefinementDirective;
use smscast_core::message::SavedMessage;
use smscast_core::tone::ToneKey;
use smscast_genai::{DraftGenerator, DraftPayload, GenAiError, GenerateDraftsRequest};
use smscast_session::CampaignSession;
use smscast_store::{CampaignStore, CampaignUpdate, SavedMessageCreate, StoreError};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

pub fn test_campaign(status: CampaignStatus) -> Campaign {
    Campaign {
        id: "cmp-1".to_string(),
        customer_id: "cus-1".to_string(),
        name: "Spring Sale".to_string(),
        start_date: date("2024-06-01"),
        end_date: date("2024-06-08"),
        products: vec!["Dress".to_string(), "Shoes".to_string()],
        discount_rate: 25,
        status,
        created_at: Utc::now(),
    }
}

pub fn test_customer() -> Customer {
    Customer {
        id: "cus-1".to_string(),
        name: "Moda Boutique".to_string(),
        website_url: "https://moda.example".to_string(),
        phone_number: Some("+15550100".to_string()),
        logo_url: None,
        created_at: Utc::now(),
    }
}

pub fn payload(content: &str, tone: &str, is_recommended: bool) -> DraftPayload {
    DraftPayload {
        tone: tone.to_string(),
        content: content.to_string(),
        is_recommended,
    }
}

pub fn saved_message(id: &str, content: &str) -> SavedMessage {
    SavedMessage {
        id: id.to_string(),
        campaign_id: "cmp-1".to_string(),
        content: content.to_string(),
        tone: "Short".to_string(),
        target_audience: "General Audience".to_string(),
        created_at: Utc::now(),
    }
}

fn genai_error() -> GenAiError {
    GenAiError::Api {
        status: 500,
        body: "no scripted response".to_string(),
    }
}

fn store_error() -> StoreError {
    StoreError::Api {
        status: 500,
        body: "no scripted response".to_string(),
    }
}

// ---------------------------------------------------------------------------
// FakeGenAi
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeGenAi {
    drafts: Mutex<VecDeque<Result<Vec<DraftPayload>, GenAiError>>>,
    refinements: Mutex<VecDeque<Result<String, GenAiError>>>,
    tones: Mutex<VecDeque<Result<Vec<String>, GenAiError>>>,
    pub generate_calls: AtomicUsize,
    pub refine_calls: AtomicUsize,
    pub tone_calls: AtomicUsize,
    last_generate: Mutex<Option<GenerateDraftsRequest>>,
    last_refinement: Mutex<Option<(String, RefinementDirective)>>,
}

impl FakeGenAi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script_drafts(&self, result: Result<Vec<DraftPayload>, GenAiError>) {
        self.drafts.lock().unwrap().push_back(result);
    }

    pub fn script_refinement(&self, result: Result<String, GenAiError>) {
        self.refinements.lock().unwrap().push_back(result);
    }

    pub fn script_tones(&self, result: Result<Vec<String>, GenAiError>) {
        self.tones.lock().unwrap().push_back(result);
    }

    /// The request body of the most recent generation call.
    pub fn last_generate_request(&self) -> Option<GenerateDraftsRequest> {
        self.last_generate.lock().unwrap().clone()
    }

    /// Content and directive of the most recent refinement call.
    pub fn last_refinement_request(&self) -> Option<(String, RefinementDirective)> {
        self.last_refinement.lock().unwrap().clone()
    }
}

#[async_trait]
impl DraftGenerator for FakeGenAi {
    async fn generate_drafts(
        &self,
        request: &GenerateDraftsRequest,
    ) -> Result<Vec<DraftPayload>, GenAiError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_generate.lock().unwrap() = Some(request.clone());
        self.drafts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(genai_error()))
    }

    async fn refine_draft(
        &self,
        content: &str,
        directive: RefinementDirective,
    ) -> Result<String, GenAiError> {
        self.refine_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_refinement.lock().unwrap() = Some((content.to_string(), directive));
        self.refinements
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(genai_error()))
    }

    async fn tone_recommendations(&self, _key: &ToneKey) -> Result<Vec<String>, GenAiError> {
        self.tone_calls.fetch_add(1, Ordering::SeqCst);
        self.tones
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(genai_error()))
    }
}

// ---------------------------------------------------------------------------
// FakeStore
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeStore {
    campaigns: Mutex<VecDeque<Result<Campaign, StoreError>>>,
    updates: Mutex<VecDeque<Result<Campaign, StoreError>>>,
    customers: Mutex<VecDeque<Result<Customer, StoreError>>>,
    message_lists: Mutex<VecDeque<Result<Vec<SavedMessage>, StoreError>>>,
    saves: Mutex<VecDeque<Result<SavedMessage, StoreError>>>,
    deletes: Mutex<VecDeque<Result<(), StoreError>>>,
    pub update_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    last_update: Mutex<Option<CampaignUpdate>>,
    last_save: Mutex<Option<SavedMessageCreate>>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script_campaign(&self, result: Result<Campaign, StoreError>) {
        self.campaigns.lock().unwrap().push_back(result);
    }

    pub fn script_update(&self, result: Result<Campaign, StoreError>) {
        self.updates.lock().unwrap().push_back(result);
    }

    pub fn script_customer(&self, result: Result<Customer, StoreError>) {
        self.customers.lock().unwrap().push_back(result);
    }

    pub fn script_messages(&self, result: Result<Vec<SavedMessage>, StoreError>) {
        self.message_lists.lock().unwrap().push_back(result);
    }

    pub fn script_save(&self, result: Result<SavedMessage, StoreError>) {
        self.saves.lock().unwrap().push_back(result);
    }

    pub fn script_delete(&self, result: Result<(), StoreError>) {
        self.deletes.lock().unwrap().push_back(result);
    }

    /// The patch body of the most recent update call.
    pub fn last_update_patch(&self) -> Option<CampaignUpdate> {
        self.last_update.lock().unwrap().clone()
    }

    /// The create body of the most recent save call.
    pub fn last_save_body(&self) -> Option<SavedMessageCreate> {
        self.last_save.lock().unwrap().clone()
    }
}

#[async_trait]
impl CampaignStore for FakeStore {
    async fn fetch_campaign(&self, _id: &str) -> Result<Campaign, StoreError> {
        self.campaigns
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(store_error()))
    }

    async fn update_campaign(
        &self,
        _id: &str,
        patch: &CampaignUpdate,
    ) -> Result<Campaign, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_update.lock().unwrap() = Some(patch.clone());
        self.updates
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(store_error()))
    }

    async fn fetch_customer(&self, _id: &str) -> Result<Customer, StoreError> {
        self.customers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(store_error()))
    }

    async fn list_messages(&self, _campaign_id: &str) -> Result<Vec<SavedMessage>, StoreError> {
        self.message_lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(store_error()))
    }

    async fn save_message(
        &self,
        _campaign_id: &str,
        message: &SavedMessageCreate,
    ) -> Result<SavedMessage, StoreError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_save.lock().unwrap() = Some(message.clone());
        self.saves
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(store_error()))
    }

    async fn delete_message(&self, _campaign_id: &str, _message_id: &str) -> Result<(), StoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.deletes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(store_error()))
    }
}

// ---------------------------------------------------------------------------
// Session setup
// ---------------------------------------------------------------------------

/// Open a session over the given fakes with the standard fixtures:
/// a Draft campaign, its customer, no saved messages, and an empty
/// tone-recommendation list.
pub async fn open_session(
    genai: &Arc<FakeGenAi>,
    store: &Arc<FakeStore>,
) -> CampaignSession<Arc<FakeGenAi>, Arc<FakeStore>> {
    open_session_with(genai, store, test_campaign(CampaignStatus::Draft), Vec::new()).await
}

/// Open a session with a custom campaign and saved-messages fixture.
pub async fn open_session_with(
    genai: &Arc<FakeGenAi>,
    store: &Arc<FakeStore>,
    campaign: Campaign,
    saved: Vec<SavedMessage>,
) -> CampaignSession<Arc<FakeGenAi>, Arc<FakeStore>> {
    store.script_campaign(Ok(campaign));
    store.script_customer(Ok(test_customer()));
    store.script_messages(Ok(saved));
    genai.script_tones(Ok(Vec::new()));
    CampaignSession::load(Arc::clone(genai), Arc::clone(store), "cmp-1")
        .await
        .unwrap()
}
