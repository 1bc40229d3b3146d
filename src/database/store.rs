use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use super::manager::DatabaseError;
use super::record_id::RecordId;

/// Field set of a benefit record as stored (everything except the identifier).
pub type Document = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredBeneficio {
    pub id: RecordId,
    pub document: Document,
}

/// Pagination for a list call. `limit: None` returns everything after `skip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: Option<i64>,
    pub skip: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: RecordId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<RecordId>,
}

impl UpdateResult {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_count: 0,
            upserted_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Driver surface for the single `beneficios` collection.
///
/// One instance is created at startup and shared by every request; no
/// implementation keeps per-request state.
#[async_trait]
pub trait BeneficioStore: Send + Sync {
    /// Records in natural (insertion) order, paginated.
    async fn list(&self, options: ListOptions) -> Result<Vec<StoredBeneficio>, DatabaseError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<StoredBeneficio>, DatabaseError>;

    /// Case- and accent-insensitive substring match on `nome`.
    async fn search_by_nome(&self, filter: &str) -> Result<Vec<StoredBeneficio>, DatabaseError>;

    /// Stores `document` under a freshly generated identifier.
    async fn insert(&self, document: Document) -> Result<InsertResult, DatabaseError>;

    /// Replaces the top-level fields present in `patch`; other fields are kept.
    async fn update(&self, id: RecordId, patch: Document) -> Result<UpdateResult, DatabaseError>;

    /// Deletes at most one record.
    async fn delete(&self, id: RecordId) -> Result<DeleteResult, DatabaseError>;

    async fn ping(&self) -> Result<(), DatabaseError>;

    async fn close(&self) {}
}
