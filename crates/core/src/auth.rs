//! Credential provider seam for outbound requests.
//!
//! The signed-in identity and its token lifecycle live behind the
//! authentication collaborator. API clients depend on this trait and
//! fetch the bearer credential per outbound call instead of caching it
//! as mutable global state.

use async_trait::async_trait;

use crate::error::CoreError;

/// Supplies the bearer credential attached to every outbound request.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<String, CoreError>;
}

/// Fixed-token provider for tests, demos, and service accounts.
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn bearer_token(&self) -> Result<String, CoreError> {
        Ok(self.token.clone())
    }
}

#[async_trait]
impl<T: TokenProvider + ?Sized> TokenProvider for std::sync::Arc<T> {
    async fn bearer_token(&self) -> Result<String, CoreError> {
        (**self).bearer_token().await
    }
}
