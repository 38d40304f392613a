// src/data.rs
//
// The enriched record type, its projection into a display/export table,
// and the aggregations behind the summary charts.

use crate::config::consts::{VERSION_FAMILIES, family_label};
use crate::config::options::FieldOptions;

/// Flat result of enriching one identifier. Immutable once built; records
/// have no relationships with each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModRecord {
    pub mod_id: String,
    pub name: String,
    pub url: String,
    pub forge: bool,
    pub fabric: bool,
    /// Parallel to `consts::VERSION_FAMILIES`.
    pub families: Vec<bool>,
    /// Sorted, comma-joined, duplicate-free union of all game versions.
    pub all_versions: String,
}

/// Headers + string rows; the currency of the table view and export.
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }
}

/// Column labels for the current field selection.
///
/// The loader columns are always present; `fields.include_*` for loaders
/// is deliberately not consulted (see `FieldOptions`). Version-family
/// columns appear only when selected.
pub fn headers_for(fields: &FieldOptions) -> Vec<String> {
    let mut h = vec![
        s!("Name"),
        s!("Mod URL"),
        s!("Forge Modloader"),
        s!("Fabric Modloader"),
        s!("All Minecraft Versions Listed"),
    ];
    for (ix, prefix) in VERSION_FAMILIES.iter().enumerate() {
        if fields.family_selected(ix) {
            h.push(family_label(prefix));
        }
    }
    h
}

fn to_row(record: &ModRecord, fields: &FieldOptions) -> Vec<String> {
    let mut row = vec![
        record.name.clone(),
        record.url.clone(),
        record.forge.to_string(),
        record.fabric.to_string(),
        record.all_versions.clone(),
    ];
    for ix in 0..VERSION_FAMILIES.len() {
        if fields.family_selected(ix) {
            let flag = record.families.get(ix).copied().unwrap_or(false);
            row.push(flag.to_string());
        }
    }
    row
}

/// Project records through the field selection into a table.
pub fn to_dataset(records: &[ModRecord], fields: &FieldOptions) -> DataSet {
    DataSet {
        headers: Some(headers_for(fields)),
        rows: records.iter().map(|r| to_row(r, fields)).collect(),
    }
}

/* ---------------- Chart aggregations ---------------- */

/// How records split across the two loaders. The four buckets are
/// disjoint and sum to the record count, which makes them a valid pie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderUsage {
    pub fabric_only: usize,
    pub forge_only: usize,
    pub both: usize,
    pub neither: usize,
}

impl LoaderUsage {
    pub fn total(&self) -> usize {
        self.fabric_only + self.forge_only + self.both + self.neither
    }
}

pub fn loader_usage(records: &[ModRecord]) -> LoaderUsage {
    let mut usage = LoaderUsage::default();
    for r in records {
        match (r.fabric, r.forge) {
            (true, true) => usage.both += 1,
            (true, false) => usage.fabric_only += 1,
            (false, true) => usage.forge_only += 1,
            (false, false) => usage.neither += 1,
        }
    }
    usage
}

/// Per-family record counts for the selected families, as (label, count).
pub fn family_coverage(records: &[ModRecord], fields: &FieldOptions) -> Vec<(String, usize)> {
    VERSION_FAMILIES
        .iter()
        .enumerate()
        .filter(|(ix, _)| fields.family_selected(*ix))
        .map(|(ix, prefix)| {
            let n = records
                .iter()
                .filter(|r| r.families.get(ix).copied().unwrap_or(false))
                .count();
            (family_label(prefix), n)
        })
        .collect()
}
