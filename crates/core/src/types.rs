/// Identifiers are opaque strings assigned by the persistence layer.
pub type CampaignId = String;

/// Customer document id, assigned by the persistence layer.
pub type CustomerId = String;

/// Saved-message document id, assigned by the persistence layer.
pub type MessageId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
