//! Persisted campaign messages.
//!
//! A saved message is a draft promoted into the campaign's saved
//! collection. Its body is immutable once persisted; edits happen on the
//! draft before promotion. The collection is kept newest-first.

use serde::{Deserialize, Serialize};

use crate::types::{CampaignId, MessageId, Timestamp};

/// A persisted, campaign-owned message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedMessage {
    pub id: MessageId,
    pub campaign_id: CampaignId,
    pub content: String,
    /// Tone/style label the draft carried when it was saved.
    #[serde(rename = "type")]
    pub tone: String,
    pub target_audience: String,
    pub created_at: Timestamp,
}

/// Insert a freshly persisted message at the front of the collection.
pub fn prepend(messages: &mut Vec<SavedMessage>, message: SavedMessage) {
    messages.insert(0, message);
}

/// Remove the message with the given id, if present.
///
/// Returns `true` when a message was removed. Exactly one entry is ever
/// affected; ids are unique within a campaign.
pub fn remove_by_id(messages: &mut Vec<SavedMessage>, id: &str) -> bool {
    match messages.iter().position(|m| m.id == id) {
        Some(pos) => {
            messages.remove(pos);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str, content: &str) -> SavedMessage {
        SavedMessage {
            id: id.to_string(),
            campaign_id: "c1".to_string(),
            content: content.to_string(),
            tone: "Short".to_string(),
            target_audience: "Students".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn prepend_keeps_newest_first() {
        let mut messages = vec![message("m1", "older")];
        prepend(&mut messages, message("m2", "newer"));
        assert_eq!(messages[0].id, "m2");
        assert_eq!(messages[1].id, "m1");
    }

    #[test]
    fn remove_deletes_exactly_the_given_id() {
        let mut messages = vec![message("m1", "a"), message("m2", "b"), message("m3", "c")];
        assert!(remove_by_id(&mut messages, "m2"));
        let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["m1", "m3"]);
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let mut messages = vec![message("m1", "a")];
        assert!(!remove_by_id(&mut messages, "m9"));
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn tone_label_uses_the_type_wire_name() {
        let json = serde_json::to_value(message("m1", "a")).unwrap();
        assert_eq!(json["type"], "Short");
        assert!(json.get("tone").is_none());
    }
}
