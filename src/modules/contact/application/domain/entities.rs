use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A message left through the contact form. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgement handed back to the sender.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactReceipt {
    pub id: String,
    /// False when the datastore was offline and the message was only logged.
    pub stored: bool,
}

impl ContactReceipt {
    pub fn stored(id: Uuid) -> Self {
        Self {
            id: id.to_string(),
            stored: true,
        }
    }

    pub fn local(at: DateTime<Utc>) -> Self {
        Self {
            id: format!("local-{}", at.timestamp_millis()),
            stored: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageInbox {
    Offline,
    Messages(Vec<MessageRecord>),
}
