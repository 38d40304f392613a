// src/config/consts.rs

// Net config
pub const DEFAULT_COLLECTION_URL: &str = "https://modrinth.com/collection/fGMhGZGh";
pub const API_ROOT: &str = "https://api.modrinth.com/v2/project";
pub const SITE_ROOT: &str = "https://modrinth.com";
pub const USER_AGENT: &str = "modscrape/0.3";

// Collection links look like /mod/{id}
pub const MOD_PATH_PREFIX: &str = "/mod/";

// Loader names as they appear in the API's `loaders` arrays
pub const LOADER_FORGE: &str = "forge";
pub const LOADER_FABRIC: &str = "fabric";

// Version families offered for selection, as major.minor prefixes
pub const VERSION_FAMILIES: &[&str] = &["1.19", "1.20", "1.21"];

/// Column label for one version-family flag.
pub fn family_label(prefix: &str) -> String {
    format!("Minecraft Version {prefix}.x")
}

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "mods";
