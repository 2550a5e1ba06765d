use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use duckdb::{params, Connection};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::cancellable::lock_or_cancel;
use crate::application::{duplicate_name, DogRepository};
use crate::domain::{Dog, DogQuery, DomainError, NewDog};

const DOG_COLUMNS: &str = "id, name, color, tail_length, weight";

/// DuckDB-backed dog storage.
///
/// The connection is shared between instances; the staging buffer is not, so
/// each instance is one unit of work.
pub struct DuckdbDogRepository {
    conn: Arc<Mutex<Connection>>,
    pending: Mutex<Vec<NewDog>>,
}

impl DuckdbDogRepository {
    pub fn new(db_path: &Path) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::storage(format!("Failed to open DuckDB database: {}", e)))?;
        Self::initialize_schema(&conn)?;

        Ok(Self::with_connection(Arc::new(Mutex::new(conn))))
    }

    pub fn in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DomainError::storage(format!("Failed to open DuckDB in-memory DB: {}", e))
        })?;
        Self::initialize_schema(&conn)?;

        Ok(Self::with_connection(Arc::new(Mutex::new(conn))))
    }

    /// Creates a new unit of work on an existing connection. The schema must
    /// already exist (see [`DuckdbDogRepository::new`]).
    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            conn,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Returns a clone of the shared connection Arc.
    pub fn shared_connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
        conn.execute_batch(
            r#"
            CREATE SEQUENCE IF NOT EXISTS dogs_id_seq START 1;
            CREATE TABLE IF NOT EXISTS dogs (
                id INTEGER PRIMARY KEY DEFAULT nextval('dogs_id_seq'),
                name VARCHAR NOT NULL UNIQUE,
                color VARCHAR NOT NULL,
                tail_length INTEGER NOT NULL CHECK (tail_length >= 0),
                weight INTEGER NOT NULL CHECK (weight >= 0)
            );
            "#,
        )
        .map_err(|e| DomainError::storage(format!("Failed to initialize schema: {}", e)))?;

        debug!("DuckDB dog schema initialized");
        Ok(())
    }

    fn build_select(query: &DogQuery) -> String {
        let mut sql = format!("SELECT {} FROM dogs", DOG_COLUMNS);

        // Column names come from the SortField whitelist, never from input.
        match query.sort_by() {
            Some(field) => sql.push_str(&format!(
                " ORDER BY {} {}, id ASC",
                field.as_str(),
                query.order().as_sql()
            )),
            None => sql.push_str(" ORDER BY id"),
        }

        if let Some(limit) = query.limit() {
            sql.push_str(&format!(" LIMIT {}", limit));
        }
        // DuckDB takes a BIGINT offset; anything larger is past the end anyway.
        if let Some(offset) = query.offset() {
            sql.push_str(&format!(" OFFSET {}", offset.min(i64::MAX as u64)));
        }

        sql
    }

    fn row_to_dog(row: &duckdb::Row<'_>) -> duckdb::Result<Dog> {
        Ok(Dog::reconstitute(
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    }

    fn is_unique_violation(error: &duckdb::Error) -> bool {
        let message = error.to_string();
        message.contains("Duplicate key") || message.contains("unique constraint")
    }
}

#[async_trait]
impl DogRepository for DuckdbDogRepository {
    async fn find_all(
        &self,
        query: &DogQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<Dog>, DomainError> {
        let sql = Self::build_select(query);
        let conn = lock_or_cancel(&self.conn, cancel).await?;

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], Self::row_to_dog)
            .map_err(|e| DomainError::storage(format!("Failed to query dogs: {}", e)))?;

        let mut dogs = Vec::new();
        for row in rows {
            dogs.push(row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?);
        }

        debug!("Fetched {} dogs", dogs.len());
        Ok(dogs)
    }

    async fn find_by_id(
        &self,
        id: i32,
        cancel: &CancellationToken,
    ) -> Result<Option<Dog>, DomainError> {
        let conn = lock_or_cancel(&self.conn, cancel).await?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM dogs WHERE id = ?1", DOG_COLUMNS))
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        match stmt.query_row(params![id], Self::row_to_dog) {
            Ok(dog) => Ok(Some(dog)),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DomainError::storage(format!("Failed to query dog: {}", e))),
        }
    }

    async fn add(&self, dog: NewDog, cancel: &CancellationToken) -> Result<(), DomainError> {
        let mut pending = lock_or_cancel(&self.pending, cancel).await?;
        pending.push(dog);
        Ok(())
    }

    async fn name_exists(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<bool, DomainError> {
        let conn = lock_or_cancel(&self.conn, cancel).await?;

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM dogs WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .map_err(|e| DomainError::storage(format!("Failed to check dog name: {}", e)))?;

        Ok(count > 0)
    }

    async fn save_changes(&self, cancel: &CancellationToken) -> Result<Vec<Dog>, DomainError> {
        let mut pending = lock_or_cancel(&self.pending, cancel).await?;
        if pending.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = lock_or_cancel(&self.conn, cancel).await?;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let mut saved = Vec::with_capacity(pending.len());
        for dog in pending.iter() {
            let id: i32 = tx
                .query_row(
                    "INSERT INTO dogs (name, color, tail_length, weight) VALUES (?1, ?2, ?3, ?4) RETURNING id",
                    params![dog.name(), dog.color(), dog.tail_length(), dog.weight()],
                    |row| row.get(0),
                )
                .map_err(|e| {
                    if Self::is_unique_violation(&e) {
                        duplicate_name(dog.name())
                    } else {
                        DomainError::storage(format!("Failed to insert dog: {}", e))
                    }
                })?;
            saved.push(dog.clone().into_dog(id));
        }

        tx.commit()
            .map_err(|e| DomainError::storage(format!("Failed to commit dogs: {}", e)))?;
        pending.clear();

        debug!("Committed {} dogs", saved.len());
        Ok(saved)
    }
}
