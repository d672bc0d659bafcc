//! Configuration file loading for bovine-triage
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `TRIAGE_SECTION__KEY` (and `PORT` for `server.port`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./triage.toml` or `./.triage.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/bovine-triage/config.toml`
//! 5. Fallback: `~/.config/bovine-triage/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileChecklistConfig, FileConfig, FileOutputConfig, FileServerConfig, FileStorageConfig,
    FileTableConfig, StorageBackend,
};
pub use loader::ConfigLoader;
