use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{types::Json, FromRow, PgPool};
use tracing::{debug, info};
use uuid::Uuid;

use super::manager::{DatabaseError, DatabaseManager};
use super::record_id::RecordId;
use super::search::escape_like;
use super::store::{
    BeneficioStore, DeleteResult, Document, InsertResult, ListOptions, StoredBeneficio,
    UpdateResult,
};

/// Benefit records kept as JSONB documents in one PostgreSQL table.
///
/// `seq` fixes the natural (insertion) order used by listing.
pub struct PgBeneficioStore {
    pool: PgPool,
    table: String,
}

#[derive(FromRow)]
struct BeneficioRow {
    id: Uuid,
    doc: Json<Document>,
}

impl From<BeneficioRow> for StoredBeneficio {
    fn from(row: BeneficioRow) -> Self {
        StoredBeneficio {
            id: RecordId::from(row.id),
            document: row.doc.0,
        }
    }
}

impl PgBeneficioStore {
    pub fn new(pool: PgPool, table_name: &str) -> Result<Self, DatabaseError> {
        if !DatabaseManager::is_valid_table_name(table_name) {
            return Err(DatabaseError::InvalidTableName(table_name.to_string()));
        }
        Ok(Self {
            pool,
            table: format!("\"{}\"", table_name),
        })
    }

    /// Create the table (and the `unaccent` extension used by name search) if missing
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        sqlx::query("CREATE EXTENSION IF NOT EXISTS unaccent")
            .execute(&self.pool)
            .await?;

        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                seq BIGSERIAL NOT NULL,
                id UUID PRIMARY KEY,
                doc JSONB NOT NULL DEFAULT '{{}}'::jsonb,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
            self.table
        );
        sqlx::query(&ddl).execute(&self.pool).await?;

        info!("Ensured table {}", self.table);
        Ok(())
    }

    async fn fetch_all(
        &self,
        query: sqlx::query::QueryAs<'_, sqlx::Postgres, BeneficioRow, sqlx::postgres::PgArguments>,
    ) -> Result<Vec<StoredBeneficio>, DatabaseError> {
        let rows = query
            .fetch(&self.pool)
            .map_ok(StoredBeneficio::from)
            .try_collect()
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl BeneficioStore for PgBeneficioStore {
    async fn list(&self, options: ListOptions) -> Result<Vec<StoredBeneficio>, DatabaseError> {
        // LIMIT NULL is LIMIT ALL; a negative OFFSET is rejected by the server
        let sql = format!(
            "SELECT id, doc FROM {} ORDER BY seq LIMIT $1 OFFSET $2",
            self.table
        );
        debug!("list: {} limit={:?} skip={}", sql, options.limit, options.skip);

        let query = sqlx::query_as::<_, BeneficioRow>(&sql)
            .bind(options.limit)
            .bind(options.skip);
        self.fetch_all(query).await
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<StoredBeneficio>, DatabaseError> {
        let sql = format!("SELECT id, doc FROM {} WHERE id = $1", self.table);
        let row = sqlx::query_as::<_, BeneficioRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(StoredBeneficio::from))
    }

    async fn search_by_nome(&self, filter: &str) -> Result<Vec<StoredBeneficio>, DatabaseError> {
        let sql = format!(
            "SELECT id, doc FROM {} \
             WHERE lower(unaccent(doc->>'nome')) LIKE '%' || lower(unaccent($1)) || '%' ESCAPE '\\' \
             ORDER BY seq",
            self.table
        );
        let query = sqlx::query_as::<_, BeneficioRow>(&sql).bind(escape_like(filter));
        self.fetch_all(query).await
    }

    async fn insert(&self, document: Document) -> Result<InsertResult, DatabaseError> {
        let id = RecordId::generate();
        let sql = format!("INSERT INTO {} (id, doc) VALUES ($1, $2)", self.table);
        sqlx::query(&sql)
            .bind(id.as_uuid())
            .bind(Json(document))
            .execute(&self.pool)
            .await?;

        Ok(InsertResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn update(&self, id: RecordId, patch: Document) -> Result<UpdateResult, DatabaseError> {
        // A record only counts as modified when the merged document differs
        let sql = format!(
            "WITH matched AS (SELECT id FROM {table} WHERE id = $1), \
             modified AS ( \
                UPDATE {table} SET doc = doc || $2, updated_at = now() \
                WHERE id = $1 AND doc || $2 <> doc RETURNING id \
             ) \
             SELECT (SELECT count(*) FROM matched) AS matched, \
                    (SELECT count(*) FROM modified) AS modified",
            table = self.table
        );
        let (matched, modified): (i64, i64) = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .bind(Json(patch))
            .fetch_one(&self.pool)
            .await?;

        Ok(UpdateResult::new(matched as u64, modified as u64))
    }

    async fn delete(&self, id: RecordId) -> Result<DeleteResult, DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        let result = sqlx::query(&sql)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult {
            acknowledged: true,
            deleted_count: result.rows_affected(),
        })
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}
