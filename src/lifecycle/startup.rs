//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the configuration file and make it the active snapshot
//! - Re-apply logging from the loaded settings
//! - Feed watcher reloads through the same path
//!
//! # Design Decisions
//! - Fail open: any load failure is logged and the previous snapshot stays
//!   active (the built-in defaults on first load)

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::watcher::ReloadResult;
use crate::config::{load_config, SharedConfig};
use crate::observability::LogHandle;

/// Environment variable naming the configuration file.
pub const ENV_CONFIG: &str = "DUMMY_SUBMITTER_CONFIG";

/// Configuration file used when [`ENV_CONFIG`] is unset.
pub const DEFAULT_CONFIG: &str = "config.yml";

/// Load `path` into `shared`. Returns whether the new snapshot was applied.
pub fn load_or_keep(path: &Path, shared: &SharedConfig, logging: Option<&LogHandle>) -> bool {
    apply_loaded(path, load_config(path), shared, logging)
}

/// Install a load result, or log why it was rejected.
pub fn apply_loaded(
    path: &Path,
    result: ReloadResult,
    shared: &SharedConfig,
    logging: Option<&LogHandle>,
) -> bool {
    let config = match result {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), "Failed to load config");
            tracing::debug!(path = %path.display(), error = %e, "Config load failure detail");
            return false;
        }
    };

    if let Some(handle) = logging {
        if let Err(e) = handle.apply(&config.logging) {
            tracing::warn!(error = %e, "Failed to apply logging configuration");
        }
    }

    tracing::info!(
        path = %path.display(),
        code = %config.service.code,
        security_enabled = config.security.enabled,
        tokens = config.security.tokens.len(),
        log_level = %config.logging.level,
        "Loaded config"
    );
    shared.replace(config);
    true
}

/// Apply every reload attempt from a watcher until its channel closes.
pub fn spawn_config_reloader(
    mut updates: mpsc::UnboundedReceiver<ReloadResult>,
    path: PathBuf,
    shared: SharedConfig,
    logging: Option<LogHandle>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(result) = updates.recv().await {
            apply_loaded(&path, result, &shared, logging.as_ref());
        }
    })
}
