//! Customer records.
//!
//! Customers are managed elsewhere in the console; within the draft
//! workflow they are read-only context (site address and contact number
//! feed the generation request).

use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, Timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub website_url: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub created_at: Timestamp,
}
