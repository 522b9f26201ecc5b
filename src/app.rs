// src/app.rs
use crate::config::{AppConfig, BackendConfig};
use crate::pacing::Pacing;
use crate::store::sqlite::{init_db, Database};
use crate::store::{ListingBackend, SqliteBackend, StoreError, SupabaseBackend};
use std::sync::Arc;

/// Everything a request handler needs, built once at startup and handed to
/// the router explicitly.
#[derive(Clone)]
pub struct App {
    pub config: AppConfig,
    backend: Arc<dyn ListingBackend>,
}

impl App {
    pub fn new(config: AppConfig, backend: Arc<dyn ListingBackend>) -> Self {
        Self { config, backend }
    }

    /// Build the backend named by the config.
    pub fn from_config(config: AppConfig) -> Result<Self, StoreError> {
        let backend: Arc<dyn ListingBackend> = match &config.backend {
            BackendConfig::Supabase {
                url,
                key,
                table,
                timeout,
            } => {
                tracing::info!(%url, %table, "using hosted listing collection");
                Arc::new(SupabaseBackend::new(url, key, table, *timeout)?)
            }
            BackendConfig::Sqlite { path, schema_path } => {
                let db = Database::new(path);
                init_db(&db, schema_path)?;
                tracing::info!(path = %path.display(), "using local sqlite collection");
                Arc::new(SqliteBackend::new(db))
            }
        };
        Ok(Self::new(config, backend))
    }

    pub fn backend(&self) -> &dyn ListingBackend {
        self.backend.as_ref()
    }

    pub fn submit_pacing(&self) -> Pacing {
        Pacing::new(self.config.submit_hold)
    }

    pub fn contract_pacing(&self) -> Pacing {
        Pacing::new(self.config.contract_delay)
    }

    pub fn settings_pacing(&self) -> Pacing {
        Pacing::new(self.config.settings_delay)
    }
}
