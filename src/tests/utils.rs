use crate::app::App;
use crate::config::{AppConfig, BackendConfig};
use crate::domain::{Listing, NewListing};
use crate::store::sqlite::{init_db, Database};
use crate::store::{ListingBackend, OrderKey, SqliteBackend, StoreError};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::{tempdir, TempDir};

/// Fresh database with the production schema applied. The file lives in the
/// returned directory and is removed when it drops, so keep it bound.
pub fn temp_database(name: &str) -> (TempDir, Database) {
    let dir = tempdir().unwrap();
    let db = Database::new(dir.path().join(format!("{name}.sqlite3")));
    init_db(&db, Path::new("sql/schema.sql"))
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (dir, db)
}

/// Listing collection held in memory. Records every call so tests can
/// assert what reached the store.
#[derive(Default)]
pub struct MemoryBackend {
    rows: Mutex<Vec<Listing>>,
    selects: Mutex<Vec<(OrderKey, bool)>>,
    inserted: Mutex<Vec<NewListing>>,
    fail_select: bool,
    fail_insert: bool,
}

impl MemoryBackend {
    pub fn with_rows(rows: Vec<Listing>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    /// Every call fails as if the store were unreachable.
    pub fn failing() -> Self {
        Self {
            fail_select: true,
            fail_insert: true,
            ..Self::default()
        }
    }

    /// Reads work, writes are rejected.
    pub fn read_only(rows: Vec<Listing>) -> Self {
        Self {
            fail_insert: true,
            ..Self::with_rows(rows)
        }
    }

    pub fn selects(&self) -> Vec<(OrderKey, bool)> {
        self.selects.lock().unwrap().clone()
    }

    pub fn inserted(&self) -> Vec<NewListing> {
        self.inserted.lock().unwrap().clone()
    }
}

impl ListingBackend for MemoryBackend {
    fn select_all(&self, order: OrderKey, ascending: bool) -> Result<Vec<Listing>, StoreError> {
        self.selects.lock().unwrap().push((order, ascending));
        if self.fail_select {
            return Err(StoreError::Transport("connection refused".into()));
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    fn insert(&self, listing: &NewListing) -> Result<Listing, StoreError> {
        if self.fail_insert {
            return Err(StoreError::Status {
                status: 401,
                body: "permission denied for table byproducts".into(),
            });
        }
        self.inserted.lock().unwrap().push(listing.clone());

        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let row = Listing {
            id,
            material: listing.material.clone(),
            custom_material: None,
            routing: listing.routing.clone(),
            distance: listing.distance.clone(),
            raw_volume: listing.raw_volume,
            price_inr: None,
            photo_url: None,
            status: None,
            created_at: "2025-06-01T12:00:00Z".into(),
        };
        rows.insert(0, row.clone());
        Ok(row)
    }
}

/// Config with every simulated delay switched off.
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        max_workers: 1,
        backend: BackendConfig::Sqlite {
            // Never opened: tests wire their backend in directly.
            path: "unused.sqlite3".into(),
            schema_path: "sql/schema.sql".into(),
        },
        submit_hold: Duration::ZERO,
        contract_delay: Duration::ZERO,
        settings_delay: Duration::ZERO,
    }
}

pub fn memory_app(backend: Arc<MemoryBackend>) -> App {
    App::new(test_config(), backend)
}

/// App over a fresh SQLite file. The database is gone once the returned
/// `TempDir` drops.
pub fn sqlite_app() -> (TempDir, App, Arc<SqliteBackend>) {
    let (dir, db) = temp_database("router");
    let backend = Arc::new(SqliteBackend::new(db));
    (dir, App::new(test_config(), backend.clone()), backend)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
