//! Trait seam between the session workflow and the persistence API.

use async_trait::async_trait;

use smscast_core::campaign::Campaign;
use smscast_core::customer::Customer;
use smscast_core::message::SavedMessage;

use crate::api::StoreError;
use crate::models::{CampaignUpdate, SavedMessageCreate};

/// The persistence operations the draft workflow depends on.
///
/// Implemented by [`StoreApi`](crate::StoreApi) over HTTP and by
/// in-memory fakes in the session tests. Listing and creating campaigns
/// are console-level concerns and stay on the concrete client.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn fetch_campaign(&self, id: &str) -> Result<Campaign, StoreError>;

    /// Apply a partial update; the returned campaign is the server's
    /// authoritative representation.
    async fn update_campaign(
        &self,
        id: &str,
        patch: &CampaignUpdate,
    ) -> Result<Campaign, StoreError>;

    async fn fetch_customer(&self, id: &str) -> Result<Customer, StoreError>;

    async fn list_messages(&self, campaign_id: &str) -> Result<Vec<SavedMessage>, StoreError>;

    async fn save_message(
        &self,
        campaign_id: &str,
        message: &SavedMessageCreate,
    ) -> Result<SavedMessage, StoreError>;

    async fn delete_message(&self, campaign_id: &str, message_id: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: CampaignStore + ?Sized> CampaignStore for std::sync::Arc<T> {
    async fn fetch_campaign(&self, id: &str) -> Result<Campaign, StoreError> {
        (**self).fetch_campaign(id).await
    }

    async fn update_campaign(
        &self,
        id: &str,
        patch: &CampaignUpdate,
    ) -> Result<Campaign, StoreError> {
        (**self).update_campaign(id, patch).await
    }

    async fn fetch_customer(&self, id: &str) -> Result<Customer, StoreError> {
        (**self).fetch_customer(id).await
    }

    async fn list_messages(&self, campaign_id: &str) -> Result<Vec<SavedMessage>, StoreError> {
        (**self).list_messages(campaign_id).await
    }

    async fn save_message(
        &self,
        campaign_id: &str,
        message: &SavedMessageCreate,
    ) -> Result<SavedMessage, StoreError> {
        (**self).save_message(campaign_id, message).await
    }

    async fn delete_message(&self, campaign_id: &str, message_id: &str) -> Result<(), StoreError> {
        (**self).delete_message(campaign_id, message_id).await
    }
}
