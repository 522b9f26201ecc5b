// src/store/sqlite.rs
use crate::domain::{Listing, NewListing};
use crate::store::{ListingBackend, OrderKey, StoreError};
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

// Thread-local connection slot, keyed by the path it was opened for.
thread_local! {
    static DB_CONN: RefCell<Option<(PathBuf, Connection)>> = const { RefCell::new(None) };
}

#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open or fetch this worker's connection and run `f(conn)`.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let stale = slot.as_ref().map_or(true, |(p, _)| p != &self.path);
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| StoreError::Database(format!("Open DB failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }
                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(StoreError::Database("connection slot empty".into())),
                }
            })
            .map_err(|_| StoreError::Database("thread-local connection unavailable".into()))?
    }
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: &Path) -> Result<(), StoreError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| StoreError::Database(format!("Failed to read schema file: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| StoreError::Database(format!("Failed to apply schema: {e}")))
    })?;

    tracing::info!(schema = %schema_path.display(), db = %db.path().display(), "database initialized");
    Ok(())
}

/// Local stand-in for the hosted collection, same columns and defaults.
pub struct SqliteBackend {
    db: Database,
}

const SELECT_COLUMNS: &str = "id, material, custom_material, routing, distance, raw_volume, \
     price_inr, photo_url, status, created_at";

impl SqliteBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
        Ok(Listing {
            id: row.get(0)?,
            material: row.get(1)?,
            custom_material: row.get(2)?,
            routing: row.get(3)?,
            distance: row.get(4)?,
            raw_volume: row.get(5)?,
            price_inr: row.get(6)?,
            photo_url: row.get(7)?,
            status: row.get(8)?,
            created_at: row.get(9)?,
        })
    }
}

impl ListingBackend for SqliteBackend {
    fn select_all(&self, order: OrderKey, ascending: bool) -> Result<Vec<Listing>, StoreError> {
        // Column and direction come from closed enums, never from input.
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM byproducts ORDER BY {} {}",
            order.column(),
            if ascending { "ASC" } else { "DESC" }
        );

        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&sql)
                .map_err(|e| StoreError::Database(e.to_string()))?;

            let rows = stmt
                .query_map([], Self::map_row)
                .map_err(|e| StoreError::Database(e.to_string()))?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r.map_err(|e| StoreError::Database(e.to_string()))?);
            }
            Ok(out)
        })
    }

    fn insert(&self, listing: &NewListing) -> Result<Listing, StoreError> {
        let now = Utc::now().to_rfc3339();

        self.db.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO byproducts (material, routing, distance, raw_volume, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    listing.material,
                    listing.routing,
                    listing.distance,
                    listing.raw_volume,
                    now
                ],
            )
            .map_err(|e| StoreError::Database(format!("insert byproduct failed: {e}")))?;

            let id = conn.last_insert_rowid();
            conn.query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM byproducts WHERE id = ?1"),
                params![id],
                Self::map_row,
            )
            .map_err(|e| StoreError::Database(format!("read back byproduct failed: {e}")))
        })
    }
}
