// src/progress.rs
/// Lightweight progress reporting used by the long-running scrape loop.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one identifier was enriched successfully.
    fn item_done(&mut self, _mod_id: &str) {}

    /// Called when one identifier failed and was skipped.
    fn item_failed(&mut self, _mod_id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
