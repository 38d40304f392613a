// src/specs/collection.rs
//! Spec for the collection page.
//!
//! A collection lists its mods as anchors of the form
//! `<a href="/mod/{id}">…</a>`. We take the second path segment of every
//! such link as a candidate identifier. Links with any other number of
//! segments (e.g. `/mod/{id}/versions`) are silently skipped; duplicates
//! collapse to one. An empty result is a valid outcome, not an error.

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::config::consts::MOD_PATH_PREFIX;
use crate::core::{net::Client, ScrapeError};

/// Fetch the collection page and return its unique mod identifiers.
/// Order of the result is unspecified.
pub fn fetch(client: &Client, url: &str) -> Result<Vec<String>, ScrapeError> {
    let html = client.get_text(url)?;
    Ok(extract_mod_ids(&html))
}

/// Pure extraction over an already-fetched document.
pub fn extract_mod_ids(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    // Static pattern, cannot fail to parse.
    let sel = Selector::parse(r#"a[href^="/mod/"]"#).expect("static selector");

    let mut seen: HashSet<&str> = HashSet::new();
    let mut ids = Vec::new();

    for a in doc.select(&sel) {
        let Some(href) = a.value().attr("href") else { continue };
        debug_assert!(href.starts_with(MOD_PATH_PREFIX));

        let parts: Vec<&str> = href.trim_matches('/').split('/').collect();
        if parts.len() != 2 || parts[0] != "mod" || parts[1].is_empty() {
            continue;
        }
        if seen.insert(parts[1]) {
            ids.push(s!(parts[1]));
        }
    }

    ids
}
