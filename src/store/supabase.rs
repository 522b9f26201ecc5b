// src/store/supabase.rs
use crate::domain::{Listing, NewListing};
use crate::store::{ListingBackend, OrderKey, StoreError};
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use url::Url;

/// PostgREST endpoint of a hosted Supabase project.
pub struct SupabaseBackend {
    base_url: String,
    api_key: String,
    table: String,
    client: Client,
}

impl SupabaseBackend {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: table.into(),
            client,
        })
    }

    fn table_url(&self) -> Result<Url, StoreError> {
        Url::parse(&format!("{}/rest/v1/{}", self.base_url, self.table))
            .map_err(|e| StoreError::Transport(format!("bad store url: {e}")))
    }

    /// `GET /rest/v1/{table}?select=*&order={column}.{asc|desc}`
    pub fn select_url(&self, order: OrderKey, ascending: bool) -> Result<Url, StoreError> {
        let mut url = self.table_url()?;
        let direction = if ascending { "asc" } else { "desc" };
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", &format!("{}.{direction}", order.column()));
        Ok(url)
    }

    fn check(resp: Response) -> Result<Response, StoreError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
        Err(StoreError::Status { status, body })
    }
}

impl ListingBackend for SupabaseBackend {
    fn select_all(&self, order: OrderKey, ascending: bool) -> Result<Vec<Listing>, StoreError> {
        let resp = self
            .client
            .get(self.select_url(order, ascending)?)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::check(resp)?
            .json::<Vec<Listing>>()
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn insert(&self, listing: &NewListing) -> Result<Listing, StoreError> {
        let resp = self
            .client
            .post(self.table_url()?)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&[listing])
            .send()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let mut rows = Self::check(resp)?
            .json::<Vec<Listing>>()
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        if rows.is_empty() {
            return Err(StoreError::EmptyInsert);
        }
        Ok(rows.swap_remove(0))
    }
}
