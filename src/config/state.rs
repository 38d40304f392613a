// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Render the pie charts below the table
    pub show_charts: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self { show_charts: true }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
