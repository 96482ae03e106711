//! SQLite implementation of [`DocumentStore`].
//!
//! [`SqliteStore`] persists documents in a single `documents` table with WAL
//! mode, atomic transactions on every write, and automatic schema migrations.
//! Document bodies are stored as JSON TEXT via serde_json; the autoincrement
//! `seq` column preserves insertion order.

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use crate::error::StoreError;
use crate::filter::Filter;
use crate::traits::DocumentStore;
use crate::types::{apply_set, assign_id, check_set, Document, UpdateResult};

/// SQLite-backed implementation of [`DocumentStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let conn = crate::schema::open_database(path)?;
        tracing::debug!(path, "opened sqlite document store");
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    fn decode(body: &str) -> Result<Document, StoreError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Streams the collection in `seq` order, keeping rows that match.
    ///
    /// Returns `(seq, document)` pairs.
    fn scan(
        conn: &Connection,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<(i64, Document)>, StoreError> {
        if let Some(id) = filter.id_lookup() {
            let row: Option<(i64, String)> = conn
                .query_row(
                    "SELECT seq, body FROM documents WHERE collection = ?1 AND doc_id = ?2",
                    params![collection, id],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;
            return match row {
                Some((seq, body)) if limit != Some(0) => Ok(vec![(seq, Self::decode(&body)?)]),
                _ => Ok(Vec::new()),
            };
        }

        // Without conditions the limit can be pushed into SQL.
        let sql_limit: i64 = match (filter.is_empty(), limit) {
            (true, Some(n)) => i64::try_from(n).unwrap_or(i64::MAX),
            _ => -1,
        };
        let mut stmt = conn.prepare(
            "SELECT seq, body FROM documents WHERE collection = ?1 ORDER BY seq LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![collection, sql_limit], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for row in rows {
            if limit.is_some_and(|n| out.len() >= n) {
                break;
            }
            let (seq, body) = row?;
            let doc = Self::decode(&body)?;
            if filter.matches(&doc) {
                out.push((seq, doc));
            }
        }
        Ok(out)
    }
}

impl DocumentStore for SqliteStore {
    fn insert_one(&mut self, collection: &str, mut doc: Document) -> Result<String, StoreError> {
        let id = assign_id(&mut doc)?;
        let body = serde_json::to_string(&doc)?;

        let tx = self.conn.transaction()?;
        let inserted = tx.execute(
            "INSERT INTO documents (collection, doc_id, body) VALUES (?1, ?2, ?3)",
            params![collection, id, body],
        );
        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                return Err(StoreError::DuplicateKey {
                    collection: collection.to_string(),
                    id,
                });
            }
            Err(e) => return Err(e.into()),
        }
        tx.commit()?;
        Ok(id)
    }

    fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError> {
        Ok(Self::scan(&self.conn, collection, filter, Some(1))?
            .into_iter()
            .next()
            .map(|(_, doc)| doc))
    }

    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        Ok(Self::scan(&self.conn, collection, filter, limit)?
            .into_iter()
            .map(|(_, doc)| doc)
            .collect())
    }

    fn update_one(
        &mut self,
        collection: &str,
        filter: &Filter,
        set: &Document,
    ) -> Result<UpdateResult, StoreError> {
        check_set(set)?;

        let tx = self.conn.transaction()?;
        let Some((seq, mut doc)) = Self::scan(&tx, collection, filter, Some(1))?
            .into_iter()
            .next()
        else {
            return Ok(UpdateResult::default());
        };

        let modified = apply_set(&mut doc, set);
        if modified {
            tx.execute(
                "UPDATE documents SET body = ?1 WHERE seq = ?2",
                params![serde_json::to_string(&doc)?, seq],
            )?;
        }
        tx.commit()?;

        Ok(UpdateResult {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }
}
