// src/scrape.rs
//
// The pipeline driver: collect identifiers once, then enrich them one by
// one with a fixed pause in between. Sequential and blocking by design —
// there is no coordination problem here worth threads.

use std::{thread, time::Duration};

use crate::{
    config::options::ScrapeOptions,
    core::{net::Client, ScrapeError},
    data::ModRecord,
    progress::Progress,
    specs::{collection, project::{self, ProjectInfo, VersionEntry}},
};

/// Where enrichment data comes from. The real implementation is the HTTP
/// `Client`; tests substitute a canned source.
pub trait ModSource {
    fn fetch_project(&self, mod_id: &str) -> Result<ProjectInfo, ScrapeError>;
    fn fetch_versions(&self, mod_id: &str) -> Result<Vec<VersionEntry>, ScrapeError>;
    fn mod_page_url(&self, mod_id: &str) -> String;
}

impl ModSource for Client {
    fn fetch_project(&self, mod_id: &str) -> Result<ProjectInfo, ScrapeError> {
        self.get_json(&self.project_url(mod_id))
    }

    fn fetch_versions(&self, mod_id: &str) -> Result<Vec<VersionEntry>, ScrapeError> {
        self.get_json(&self.versions_url(mod_id))
    }

    fn mod_page_url(&self, mod_id: &str) -> String {
        Client::mod_page_url(self, mod_id)
    }
}

/// Scrape the collection page for identifiers. A failure here aborts the
/// whole run; there is nothing to enrich without it.
pub fn collect_mod_ids(client: &Client, url: &str) -> Result<Vec<String>, ScrapeError> {
    logf!("Collect: {url}");
    let ids = collection::fetch(client, url)?;
    logf!("Collect: {} unique mod id(s)", ids.len());
    Ok(ids)
}

/// Enrich one identifier: two dependent requests, then pure derivation.
pub fn enrich_one(source: &dyn ModSource, mod_id: &str) -> Result<ModRecord, ScrapeError> {
    let project = source.fetch_project(mod_id)?;
    let versions = source.fetch_versions(mod_id)?;
    Ok(project::derive_record(
        mod_id,
        source.mod_page_url(mod_id),
        &project,
        &versions,
    ))
}

/// Enrich every identifier in sequence. A failed identifier contributes
/// nothing to the result and does not stop the loop.
pub fn enrich_all(
    source: &dyn ModSource,
    ids: &[String],
    pause: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<ModRecord> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    let mut records = Vec::with_capacity(ids.len());
    for (i, id) in ids.iter().enumerate() {
        if i > 0 && !pause.is_zero() {
            thread::sleep(pause); // be polite
        }
        match enrich_one(source, id) {
            Ok(record) => {
                records.push(record);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id);
                }
            }
            Err(e) => {
                loge!("Mod {id}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Failed to fetch data for mod {id}: {e}"));
                    p.item_failed(id);
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    records
}

/// Whole pipeline: collect, then enrich.
pub fn run(
    client: &Client,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ModRecord>, ScrapeError> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching mod ids from collection…");
    }
    let ids = collect_mod_ids(client, &scrape.url)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} mods in collection", ids.len()));
    }

    let pause = Duration::from_millis(scrape.pause_ms);
    Ok(enrich_all(client, &ids, pause, progress))
}
