use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::manager::DatabaseError;

/// Storage-assigned identifier of a benefit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Construct an identifier from client input. Anything that is not a UUID fails.
    pub fn parse(value: &str) -> Result<Self, DatabaseError> {
        Uuid::parse_str(value)
            .map(RecordId)
            .map_err(|_| DatabaseError::InvalidIdentifier(value.to_string()))
    }

    pub fn generate() -> Self {
        RecordId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        RecordId(id)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
