//! REST client for the persistence API.
//!
//! CRUD over campaigns and customers plus the nested saved-messages
//! collection, using [`reqwest`]. Every request carries a bearer
//! credential fetched from the injected [`TokenProvider`] at call time.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use smscast_core::auth::TokenProvider;
use smscast_core::campaign::Campaign;
use smscast_core::customer::Customer;
use smscast_core::message::SavedMessage;

use crate::models::{CampaignCreate, CampaignUpdate, SavedMessageCreate};
use crate::service::CampaignStore;

/// HTTP request timeout for persistence calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors from the persistence REST layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("Store API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The credential provider could not supply a bearer token.
    #[error("credential provider failed: {0}")]
    Auth(#[from] smscast_core::CoreError),
}

/// HTTP client for the persistence API.
pub struct StoreApi {
    client: reqwest::Client,
    base_url: String,
    token: Arc<dyn TokenProvider>,
}

impl StoreApi {
    /// Create a new client.
    ///
    /// * `base_url` - API base URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>, token: Arc<dyn TokenProvider>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// List campaigns, optionally filtered to one customer.
    pub async fn list_campaigns(
        &self,
        customer_id: Option<&str>,
    ) -> Result<Vec<Campaign>, StoreError> {
        let token = self.token.bearer_token().await?;
        let mut request = self
            .client
            .get(format!("{}/campaigns", self.base_url))
            .bearer_auth(token);
        if let Some(id) = customer_id {
            request = request.query(&[("customer_id", id)]);
        }
        Self::parse_response(request.send().await?).await
    }

    /// Create a campaign.
    pub async fn create_campaign(&self, create: &CampaignCreate) -> Result<Campaign, StoreError> {
        let token = self.token.bearer_token().await?;
        let response = self
            .client
            .post(format!("{}/campaigns", self.base_url))
            .bearer_auth(token)
            .json(create)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch one campaign by id.
    pub async fn fetch_campaign(&self, id: &str) -> Result<Campaign, StoreError> {
        let token = self.token.bearer_token().await?;
        let response = self
            .client
            .get(format!("{}/campaigns/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Apply a partial update and return the server's representation.
    pub async fn update_campaign(
        &self,
        id: &str,
        patch: &CampaignUpdate,
    ) -> Result<Campaign, StoreError> {
        let token = self.token.bearer_token().await?;
        let response = self
            .client
            .put(format!("{}/campaigns/{id}", self.base_url))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch one customer by id.
    pub async fn fetch_customer(&self, id: &str) -> Result<Customer, StoreError> {
        let token = self.token.bearer_token().await?;
        let response = self
            .client
            .get(format!("{}/customers/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch a campaign's saved messages, newest first.
    pub async fn list_messages(&self, campaign_id: &str) -> Result<Vec<SavedMessage>, StoreError> {
        let token = self.token.bearer_token().await?;
        let response = self
            .client
            .get(format!("{}/campaigns/{campaign_id}/messages", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Persist a message and return it with its server-assigned id and
    /// timestamp.
    pub async fn save_message(
        &self,
        campaign_id: &str,
        message: &SavedMessageCreate,
    ) -> Result<SavedMessage, StoreError> {
        let token = self.token.bearer_token().await?;
        let response = self
            .client
            .post(format!("{}/campaigns/{campaign_id}/messages", self.base_url))
            .bearer_auth(token)
            .json(message)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a saved message. The store answers 204 on success.
    pub async fn delete_message(
        &self,
        campaign_id: &str,
        message_id: &str,
    ) -> Result<(), StoreError> {
        let token = self.token.bearer_token().await?;
        let response = self
            .client
            .delete(format!(
                "{}/campaigns/{campaign_id}/messages/{message_id}",
                self.base_url
            ))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Deserialize a 2xx response body, or surface status + body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }

    /// Succeed on any 2xx without reading a body.
    async fn check_status(response: reqwest::Response) -> Result<(), StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CampaignStore for StoreApi {
    async fn fetch_campaign(&self, id: &str) -> Result<Campaign, StoreError> {
        StoreApi::fetch_campaign(self, id).await
    }

    async fn update_campaign(
        &self,
        id: &str,
        patch: &CampaignUpdate,
    ) -> Result<Campaign, StoreError> {
        StoreApi::update_campaign(self, id, patch).await
    }

    async fn fetch_customer(&self, id: &str) -> Result<Customer, StoreError> {
        StoreApi::fetch_customer(self, id).await
    }

    async fn list_messages(&self, campaign_id: &str) -> Result<Vec<SavedMessage>, StoreError> {
        StoreApi::list_messages(self, campaign_id).await
    }

    async fn save_message(
        &self,
        campaign_id: &str,
        message: &SavedMessageCreate,
    ) -> Result<SavedMessage, StoreError> {
        StoreApi::save_message(self, campaign_id, message).await
    }

    async fn delete_message(&self, campaign_id: &str, message_id: &str) -> Result<(), StoreError> {
        StoreApi::delete_message(self, campaign_id, message_id).await
    }
}
