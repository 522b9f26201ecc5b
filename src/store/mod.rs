// src/store/mod.rs
//
// The remote listing collection, behind one seam so pages and tests never
// care which backend is wired in.

pub mod sqlite;
pub mod supabase;

use crate::domain::{Listing, NewListing};
use thiserror::Error;

pub use sqlite::SqliteBackend;
pub use supabase::SupabaseBackend;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("store rejected request ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("could not decode store response: {0}")]
    Decode(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("insert returned no row")]
    EmptyInsert,
}

/// Column a full select is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKey {
    Id,
    CreatedAt,
}

impl OrderKey {
    pub fn column(&self) -> &'static str {
        match self {
            OrderKey::Id => "id",
            OrderKey::CreatedAt => "created_at",
        }
    }
}

pub trait ListingBackend: Send + Sync {
    fn select_all(&self, order: OrderKey, ascending: bool) -> Result<Vec<Listing>, StoreError>;

    fn insert(&self, listing: &NewListing) -> Result<Listing, StoreError>;
}
