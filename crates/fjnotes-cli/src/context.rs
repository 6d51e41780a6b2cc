use fjnotes_core::{AppConfig, FjnotesResult};
use fjnotes_domain::BoardEngine;
use fjnotes_persistence::FileStore;
use std::path::PathBuf;

pub struct CliContext {
    pub engine: BoardEngine<FileStore>,
    pub config: AppConfig,
}

impl CliContext {
    /// Open the board stored in `data_dir`, or in the configured data directory.
    pub fn open(data_dir: Option<PathBuf>) -> FjnotesResult<Self> {
        let mut config = AppConfig::load();
        if data_dir.is_some() {
            config.data_dir = data_dir;
        }

        let store = FileStore::new(config.effective_data_dir());
        tracing::debug!("Opening board in {}", store.dir().display());
        let engine = BoardEngine::with_config(store, &config)?;

        Ok(Self { engine, config })
    }

    /// Storage failure from this run, formatted for the response warning.
    pub fn take_warning(&mut self) -> Option<String> {
        self.engine
            .take_flush_error()
            .map(|e| format!("Changes were not saved: {}", e))
    }
}
