//! REST client for the AI text service endpoints.
//!
//! Wraps draft generation, draft refinement, and tone recommendation
//! using [`reqwest`]. Every request carries a bearer credential fetched
//! from the injected [`TokenProvider`] at call time.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use smscast_core::auth::TokenProvider;
use smscast_core::draft::RefinementDirective;
use smscast_core::tone::ToneKey;

use crate::models::{
    DraftPayload, GenerateDraftsRequest, GenerateDraftsResponse, RefineRequest, RefineResponse,
    ToneRecommendationsResponse,
};
use crate::service::DraftGenerator;

/// HTTP request timeout. Generation calls routinely take several
/// seconds; the ceiling only catches hung connections.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors from the AI service REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("AI service error ({status}): {body}")]
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

/// HTTP client for the AI text services.
pub struct GenAiApi {
    client: reqwest::Client,
    base_url: String,
    token: Arc<dyn TokenProvider>,
}

impl GenAiApi {
    /// Create a new client.
    ///
    /// * `base_url` - service base URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>, token: Arc<dyn TokenProvider>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: trim_base(base_url.into()),
            token,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        token: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            client,
            base_url: trim_base(base_url.into()),
            token,
        }
    }

    /// Request a batch of candidate drafts.
    ///
    /// Sends `POST /generate-drafts`. The response carries one draft per
    /// requested message, each tagged with a tone label.
    pub async fn generate_drafts(
        &self,
        request: &GenerateDraftsRequest,
    ) -> Result<Vec<DraftPayload>, GenAiError> {
        let token = self.token.bearer_token().await?;
        let response = self
            .client
            .post(format!("{}/generate-drafts", self.base_url))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        let parsed: GenerateDraftsResponse = Self::parse_response(response).await?;
        Ok(parsed.drafts)
    }

    /// Rewrite one message body according to a refinement directive.
    ///
    /// Sends `POST /refine-draft` and returns the rewritten body.
    pub async fn refine_draft(
        &self,
        content: &str,
        directive: RefinementDirective,
    ) -> Result<String, GenAiError> {
        let token = self.token.bearer_token().await?;
        let request = RefineRequest {
            content: content.to_string(),
            refinement_type: directive,
        };
        let response = self
            .client
            .post(format!("{}/refine-draft", self.base_url))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let parsed: RefineResponse = Self::parse_response(response).await?;
        Ok(parsed.content)
    }

    /// Fetch ranked tone suggestions for a campaign shape.
    ///
    /// Sends `GET /tone-recommendations` with the key's fields as query
    /// parameters.
    pub async fn tone_recommendations(&self, key: &ToneKey) -> Result<Vec<String>, GenAiError> {
        let token = self.token.bearer_token().await?;
        let response = self
            .client
            .get(format!("{}/tone-recommendations", self.base_url))
            .bearer_auth(token)
            .query(&[
                ("discount_rate", key.discount_rate.to_string()),
                ("duration_days", key.duration_days.to_string()),
                ("products", key.products.clone()),
                ("audience", key.audience.clone()),
            ])
            .send()
            .await?;

        let parsed: ToneRecommendationsResponse = Self::parse_response(response).await?;
        Ok(parsed.recommendations)
    }

    // ---- private helpers ----

    /// Deserialize a 2xx response body, or surface status + body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GenAiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[async_trait]
impl DraftGenerator for GenAiApi {
    async fn generate_drafts(
        &self,
        request: &GenerateDraftsRequest,
    ) -> Result<Vec<DraftPayload>, GenAiError> {
        GenAiApi::generate_drafts(self, request).await
    }

    async fn refine_draft(
        &self,
        content: &str,
        directive: RefinementDirective,
    ) -> Result<String, GenAiError> {
        GenAiApi::refine_draft(self, content, directive).await
    }

    async fn tone_recommendations(&self, key: &ToneKey) -> Result<Vec<String>, GenAiError> {
        GenAiApi::tone_recommendations(self, key).await
    }
}
