use async_trait::async_trait;
use tokio::sync::RwLock;

use super::manager::DatabaseError;
use super::record_id::RecordId;
use super::search::fold_for_search;
use super::store::{
    BeneficioStore, DeleteResult, Document, InsertResult, ListOptions, StoredBeneficio,
    UpdateResult,
};
use crate::validation::coerce_to_string;

/// Process-local store with the same semantics as the PostgreSQL one.
/// Records are kept in insertion order.
#[derive(Default)]
pub struct MemoryBeneficioStore {
    records: RwLock<Vec<StoredBeneficio>>,
}

impl MemoryBeneficioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl BeneficioStore for MemoryBeneficioStore {
    async fn list(&self, options: ListOptions) -> Result<Vec<StoredBeneficio>, DatabaseError> {
        if options.skip < 0 {
            return Err(DatabaseError::QueryError("skip must not be negative".to_string()));
        }
        let skip = options.skip as usize;
        let take = match options.limit {
            Some(limit) if limit >= 0 => limit as usize,
            Some(_) => return Err(DatabaseError::QueryError("limit must not be negative".to_string())),
            None => usize::MAX,
        };

        let records = self.records.read().await;
        Ok(records.iter().skip(skip).take(take).cloned().collect())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<StoredBeneficio>, DatabaseError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn search_by_nome(&self, filter: &str) -> Result<Vec<StoredBeneficio>, DatabaseError> {
        let needle = fold_for_search(filter);
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| {
                r.document
                    .get("nome")
                    .filter(|v| !v.is_null())
                    .map(|nome| fold_for_search(&coerce_to_string(nome)).contains(&needle))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    async fn insert(&self, document: Document) -> Result<InsertResult, DatabaseError> {
        let id = RecordId::generate();
        self.records.write().await.push(StoredBeneficio { id, document });
        Ok(InsertResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn update(&self, id: RecordId, patch: Document) -> Result<UpdateResult, DatabaseError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(UpdateResult::new(0, 0));
        };

        let mut merged = record.document.clone();
        merged.extend(patch);
        if merged == record.document {
            return Ok(UpdateResult::new(1, 0));
        }
        record.document = merged;
        Ok(UpdateResult::new(1, 1))
    }

    async fn delete(&self, id: RecordId) -> Result<DeleteResult, DatabaseError> {
        let mut records = self.records.write().await;
        let deleted_count = match records.iter().position(|r| r.id == id) {
            Some(index) => {
                records.remove(index);
                1
            }
            None => 0,
        };
        Ok(DeleteResult {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    async fn seeded(names: &[&str]) -> (MemoryBeneficioStore, Vec<RecordId>) {
        let store = MemoryBeneficioStore::new();
        let mut ids = Vec::new();
        for name in names {
            let result = store.insert(doc(json!({ "nome": name }))).await.unwrap();
            ids.push(result.inserted_id);
        }
        (store, ids)
    }

    #[tokio::test]
    async fn list_paginates_in_insertion_order() {
        let (store, ids) = seeded(&["um", "dois", "tres", "quatro", "cinco"]).await;

        let page = store
            .list(ListOptions { limit: Some(2), skip: 1 })
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, ids[1]);
        assert_eq!(page[1].id, ids[2]);

        let all = store.list(ListOptions { limit: None, skip: 0 }).await.unwrap();
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn list_rejects_negative_skip() {
        let (store, _) = seeded(&["um"]).await;
        let result = store.list(ListOptions { limit: Some(10), skip: -1 }).await;
        assert!(matches!(result, Err(DatabaseError::QueryError(_))));
    }

    #[tokio::test]
    async fn search_ignores_case_and_accents() {
        let (store, _) = seeded(&["Cesta Básica", "Auxílio Gás", "Bolsa Escola"]).await;

        for filter in ["cesta", "BÁSICA", "ta bas"] {
            let found = store.search_by_nome(filter).await.unwrap();
            assert_eq!(found.len(), 1, "filter {:?}", filter);
            assert_eq!(found[0].document["nome"], "Cesta Básica");
        }
        assert_eq!(store.search_by_nome("a").await.unwrap().len(), 3);
        assert!(store.search_by_nome("inexistente").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_matches_non_string_nome_by_text() {
        let store = MemoryBeneficioStore::new();
        store.insert(doc(json!({ "nome": 12345 }))).await.unwrap();
        store.insert(doc(json!({ "nome": null }))).await.unwrap();
        store.insert(doc(json!({ "pontos": 234 }))).await.unwrap();

        let found = store.search_by_nome("234").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].document["nome"], 12345);
        assert!(store.search_by_nome("null").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_merges_and_counts_modifications() {
        let store = MemoryBeneficioStore::new();
        let id = store
            .insert(doc(json!({ "nome": "Cesta Básica", "pontos": 10 })))
            .await
            .unwrap()
            .inserted_id;

        let result = store.update(id, doc(json!({ "pontos": 20 }))).await.unwrap();
        assert_eq!(result, UpdateResult::new(1, 1));

        let stored = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.document["pontos"], 20);
        assert_eq!(stored.document["nome"], "Cesta Básica");

        let unchanged = store.update(id, doc(json!({ "pontos": 20 }))).await.unwrap();
        assert_eq!(unchanged, UpdateResult::new(1, 0));

        let missing = store
            .update(RecordId::generate(), doc(json!({ "pontos": 1 })))
            .await
            .unwrap();
        assert_eq!(missing, UpdateResult::new(0, 0));
    }

    #[tokio::test]
    async fn delete_removes_at_most_one() {
        let (store, ids) = seeded(&["um", "dois"]).await;

        let result = store.delete(ids[0]).await.unwrap();
        assert_eq!(result.deleted_count, 1);
        assert_eq!(store.len().await, 1);
        assert!(!store.is_empty().await);

        let again = store.delete(ids[0]).await.unwrap();
        assert_eq!(again.deleted_count, 0);
        assert!(store.find_by_id(ids[0]).await.unwrap().is_none());
    }
}
