use crate::cache::ImageCache;
use crate::catalog::OptionStore;
use crate::config::AppConfig;
use crate::grid::{CellState, Grid};
use crate::model::CellPosition;
use crate::samples::ensure_sample_options;

use super::Result;

pub const READY_STATUS: &str = "Ready.";
pub const CLEARED_STATUS: &str = "Cleared all cells.";

/// Root context: owns the option store, the image cache, the grid and the
/// status line, and exposes the user-level actions.
#[derive(Debug)]
pub struct AppContext {
    config: AppConfig,
    store: OptionStore,
    cache: ImageCache,
    grid: Grid,
    status: String,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self::with_cache(config, ImageCache::new())
    }

    pub fn with_cache(config: AppConfig, cache: ImageCache) -> Self {
        Self {
            config,
            store: OptionStore::new(),
            cache,
            grid: Grid::new(),
            status: READY_STATUS.to_string(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &OptionStore {
        &self.store
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Generates sample data if needed, then loads the options file.
    pub fn bootstrap(&mut self) -> Result<()> {
        ensure_sample_options(&self.config)?;
        self.reload_options()
    }

    /// Reloads the options file. On failure nothing changes.
    pub fn reload_options(&mut self) -> Result<()> {
        let count = self.store.load(&self.config.options_path)?;
        let invalidated =
            self.grid
                .on_options_loaded(&self.store, &mut self.cache, self.config.cell_size);
        log::info!(
            "loaded {count} options from {} ({invalidated} selections cleared)",
            self.config.options_path.display()
        );
        let file_name = self
            .config
            .options_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.config.options_path.display().to_string());
        self.status = format!("Loaded options: {file_name}");
        Ok(())
    }

    pub fn select(&mut self, position: CellPosition, name: &str) -> CellState {
        self.grid.on_selection_changed(
            position,
            name,
            &self.store,
            &mut self.cache,
            self.config.cell_size,
        )
    }

    pub fn clear_all(&mut self) {
        let cleared = self.grid.clear_all();
        log::debug!("cleared {cleared} cells");
        self.status = CLEARED_STATUS.to_string();
    }
}
