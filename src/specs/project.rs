// src/specs/project.rs
//! Spec for the metadata API.
//!
//! Two bodies per identifier: the project object (we only care about
//! `title`) and the release list (each entry optionally carries `loaders`
//! and `game_versions` arrays). Everything else in the responses is
//! ignored on purpose — the API returns far more than we tabulate.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::config::consts::{LOADER_FABRIC, LOADER_FORGE, VERSION_FAMILIES};
use crate::data::ModRecord;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct VersionEntry {
    #[serde(default)]
    pub loaders: Vec<String>,
    #[serde(default)]
    pub game_versions: Vec<String>,
}

/// Flatten one identifier's metadata into a record.
///
/// - `forge`/`fabric`: true iff any release entry lists that loader.
/// - family flags: one per known family, true iff any accumulated version
///   string starts with the family prefix. All families are derived here;
///   the caller's selection gates columns later, at projection time.
/// - `all_versions`: sorted, comma-joined, duplicate-free union of every
///   `game_versions` entry.
pub fn derive_record(
    mod_id: &str,
    mod_url: String,
    project: &ProjectInfo,
    versions: &[VersionEntry],
) -> ModRecord {
    let mut forge = false;
    let mut fabric = false;
    let mut mc_versions: BTreeSet<&str> = BTreeSet::new();

    for entry in versions {
        if entry.loaders.iter().any(|l| l == LOADER_FABRIC) {
            fabric = true;
        }
        if entry.loaders.iter().any(|l| l == LOADER_FORGE) {
            forge = true;
        }
        mc_versions.extend(entry.game_versions.iter().map(String::as_str));
    }

    let families = VERSION_FAMILIES
        .iter()
        .map(|prefix| mc_versions.iter().any(|v| v.starts_with(prefix)))
        .collect();

    // BTreeSet iteration is already the lexicographic order we present.
    let all_versions = mc_versions.into_iter().collect::<Vec<_>>().join(", ");

    ModRecord {
        mod_id: s!(mod_id),
        name: project.title.clone(),
        url: mod_url,
        forge,
        fabric,
        families,
        all_versions,
    }
}
