//! PostgreSQL document backend.
//!
//! Every collection lives in the single `documents` table. Filters are
//! evaluated with JSONB containment (`body @> filter`), which is equality for
//! the scalar values [`Filter`] carries, and results come back in insertion
//! order (`seq`).

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use tracing::instrument;

use crate::document::{Document, Filter, UpdateOutcome, ensure_id};
use crate::error::StoreError;

pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

fn map_write_error(collection: &str, err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        return StoreError::Duplicate {
            collection: collection.to_string(),
        };
    }
    StoreError::from(err)
}

#[instrument(skip(pool))]
pub async fn find_one(
    pool: &PgPool,
    collection: &str,
    filter: &Filter,
) -> Result<Option<Document>, StoreError> {
    let row = sqlx::query_scalar::<_, Json<Document>>(
        r#"SELECT body FROM documents
           WHERE collection = $1 AND body @> $2
           ORDER BY seq
           LIMIT 1"#,
    )
    .bind(collection)
    .bind(Json(filter.as_document().clone()))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|Json(doc)| doc))
}

#[instrument(skip(pool))]
pub async fn find(
    pool: &PgPool,
    collection: &str,
    filter: &Filter,
) -> Result<Vec<Document>, StoreError> {
    let rows = sqlx::query_scalar::<_, Json<Document>>(
        r#"SELECT body FROM documents
           WHERE collection = $1 AND body @> $2
           ORDER BY seq"#,
    )
    .bind(collection)
    .bind(Json(filter.as_document().clone()))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|Json(doc)| doc).collect())
}

#[instrument(skip(pool, doc))]
pub async fn insert_one(
    pool: &PgPool,
    collection: &str,
    mut doc: Document,
) -> Result<String, StoreError> {
    let id = ensure_id(&mut doc);

    sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
        .bind(collection)
        .bind(&id)
        .bind(Json(doc))
        .execute(pool)
        .await
        .map_err(|e| map_write_error(collection, e))?;

    Ok(id)
}

#[instrument(skip(pool))]
pub async fn update_one(
    pool: &PgPool,
    collection: &str,
    filter: &Filter,
    set: &Document,
    upsert: bool,
) -> Result<UpdateOutcome, StoreError> {
    // A row only counts as modified when `set` is not already contained in it.
    let (matched, modified) = sqlx::query_as::<_, (i64, i64)>(
        r#"WITH target AS (
               SELECT seq, body FROM documents
               WHERE collection = $1 AND body @> $2
               ORDER BY seq
               LIMIT 1
           ),
           updated AS (
               UPDATE documents d
               SET body = d.body || $3
               FROM target
               WHERE d.seq = target.seq AND NOT (target.body @> $3)
               RETURNING d.seq
           )
           SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM updated)"#,
    )
    .bind(collection)
    .bind(Json(filter.as_document().clone()))
    .bind(Json(set.clone()))
    .fetch_one(pool)
    .await
    .map_err(|e| map_write_error(collection, e))?;

    if matched > 0 || !upsert {
        return Ok(UpdateOutcome {
            matched_count: matched as u64,
            modified_count: modified as u64,
            upserted_id: None,
        });
    }

    let mut doc = filter.clone().into_document();
    doc.extend(set.clone());
    let id = insert_one(pool, collection, doc).await?;

    Ok(UpdateOutcome {
        matched_count: 0,
        modified_count: 0,
        upserted_id: Some(id),
    })
}

#[instrument(skip(pool))]
pub async fn update_many(
    pool: &PgPool,
    collection: &str,
    filter: &Filter,
    set: &Document,
) -> Result<UpdateOutcome, StoreError> {
    let (matched, modified) = sqlx::query_as::<_, (i64, i64)>(
        r#"WITH target AS (
               SELECT seq, body FROM documents
               WHERE collection = $1 AND body @> $2
           ),
           updated AS (
               UPDATE documents d
               SET body = d.body || $3
               FROM target
               WHERE d.seq = target.seq AND NOT (target.body @> $3)
               RETURNING d.seq
           )
           SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM updated)"#,
    )
    .bind(collection)
    .bind(Json(filter.as_document().clone()))
    .bind(Json(set.clone()))
    .fetch_one(pool)
    .await
    .map_err(|e| map_write_error(collection, e))?;

    Ok(UpdateOutcome {
        matched_count: matched as u64,
        modified_count: modified as u64,
        upserted_id: None,
    })
}

#[instrument(skip(pool))]
pub async fn delete_one(pool: &PgPool, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
    let result = sqlx::query(
        r#"DELETE FROM documents
           WHERE seq = (
               SELECT seq FROM documents
               WHERE collection = $1 AND body @> $2
               ORDER BY seq
               LIMIT 1
           )"#,
    )
    .bind(collection)
    .bind(Json(filter.as_document().clone()))
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

#[instrument(skip(pool))]
pub async fn delete_many(pool: &PgPool, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND body @> $2")
        .bind(collection)
        .bind(Json(filter.as_document().clone()))
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
