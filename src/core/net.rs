// src/core/net.rs

// Blocking HTTP GET with a fixed identifying header.

use serde::de::DeserializeOwned;

use crate::config::consts::{API_ROOT, SITE_ROOT, USER_AGENT};
use super::error::ScrapeError;

/// Endpoint roots and the User-Agent are carried here instead of being
/// read from consts at the call sites, so tests can point a `Client` at
/// a mock server.
#[derive(Clone, Debug)]
pub struct Client {
    pub api_root: String,
    pub site_root: String,
    pub user_agent: String,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            api_root: s!(API_ROOT),
            site_root: s!(SITE_ROOT),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl Client {
    /// GET `url` and return the body as text. Non-2xx statuses and
    /// transport errors both surface as `ScrapeError::Fetch`.
    pub fn get_text(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = ureq::get(url)
            .header("User-Agent", self.user_agent.as_str())
            .call()?;
        resp.into_body()
            .read_to_string()
            .map_err(|e| ScrapeError::Fetch(e.to_string()))
    }

    /// GET `url` and deserialize the JSON body. Body-shape problems are
    /// `ScrapeError::Parse`, distinct from wire failures.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ScrapeError> {
        let body = self.get_text(url)?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn project_url(&self, mod_id: &str) -> String {
        format!("{}/{}", self.api_root, mod_id)
    }

    pub fn versions_url(&self, mod_id: &str) -> String {
        format!("{}/{}/version", self.api_root, mod_id)
    }

    pub fn mod_page_url(&self, mod_id: &str) -> String {
        format!("{}/mod/{}", self.site_root, mod_id)
    }
}
