use serde::Serialize;
use uuid::Uuid;

/// Identifier of an item in a read payload.
///
/// Static payloads number their entries; stored records carry their UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentId {
    Static(u32),
    Stored(Uuid),
}

impl From<Uuid> for ContentId {
    fn from(id: Uuid) -> Self {
        ContentId::Stored(id)
    }
}
