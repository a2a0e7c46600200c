//! HTTP-backed set source.
//!
//! Expects a static file layout: the catalog at `<base>/sets.json` (a JSON
//! array of file names) and one `<base>/<set>.json` payload per set.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use drill_core::model::{CardDraft, SetId};

use crate::catalog::{SetCatalog, SetSource, SourceError};
use crate::records::CardRecord;

/// Set source fetching catalog and payloads from a static file server.
#[derive(Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Creates a source rooted at `base_url` (trailing slash optional).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, file: &str) -> String {
        format!("{}/{}", self.base_url, file)
    }

    /// Fetch and decode one JSON file. `Ok(None)` means the file does not
    /// exist; callers decide whether that is a missing set or a broken server.
    async fn get_json<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, SourceError> {
        let url = self.url(file);
        debug!(%url, "fetching");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SourceError::Connection(format!(
                "request for {url} failed with status {status}"
            )));
        }

        let value = response
            .json::<T>()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))?;
        Ok(Some(value))
    }
}

/// Strips a trailing `.json` so catalog entries written as file names resolve
/// to plain set names.
fn strip_json_suffix(name: &str) -> &str {
    name.strip_suffix(".json").unwrap_or(name)
}

#[async_trait]
impl SetCatalog for HttpSource {
    async fn list_sets(&self) -> Result<Vec<SetId>, SourceError> {
        let names: Vec<String> = self
            .get_json("sets.json")
            .await?
            .ok_or_else(|| SourceError::Connection("catalog sets.json is missing".to_owned()))?;

        names
            .iter()
            .map(|name| {
                SetId::new(strip_json_suffix(name))
                    .map_err(|e| SourceError::Malformed(format!("bad catalog entry {name:?}: {e}")))
            })
            .collect()
    }
}

#[async_trait]
impl SetSource for HttpSource {
    async fn fetch_set(&self, id: &SetId) -> Result<Vec<CardDraft>, SourceError> {
        let file = format!("{}.json", id.as_str());
        let records: Vec<CardRecord> = self
            .get_json(&file)
            .await?
            .ok_or_else(|| SourceError::NotFound(id.clone()))?;

        debug!(set = %id, cards = records.len(), "set payload fetched");
        Ok(records.into_iter().map(CardRecord::into_draft).collect())
    }
}
