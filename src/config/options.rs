// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Which optional columns the caller wants in the output table.
///
/// Note: the loader toggles are recorded but do not gate output — the
/// Forge/Fabric columns are always emitted. Only the version-family
/// toggles filter columns. Observed behavior, kept until someone decides
/// otherwise (see DESIGN.md).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldOptions {
    pub include_fabric: bool,
    pub include_forge: bool,
    /// Parallel to `consts::VERSION_FAMILIES`.
    pub families: Vec<bool>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            include_fabric: true,
            include_forge: true,
            families: vec![true; VERSION_FAMILIES.len()],
        }
    }
}

impl FieldOptions {
    pub fn family_selected(&self, ix: usize) -> bool {
        self.families.get(ix).copied().unwrap_or(false)
    }

    /// Selected family prefixes, in canonical order.
    pub fn selected_families(&self) -> Vec<&'static str> {
        VERSION_FAMILIES
            .iter()
            .enumerate()
            .filter(|(i, _)| self.family_selected(*i))
            .map(|(_, p)| *p)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub pause_ms: u64,
    pub fields: FieldOptions,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_COLLECTION_URL),
            pause_ms: REQUEST_PAUSE_MS,
            fields: FieldOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    dir: PathBuf,
    file_stem: String, // without extension
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.file_stem, self.format.ext()))
    }

    /// Parse GUI/CLI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.file_stem = stem.to_string_lossy().into_owned();
        }
    }
}
