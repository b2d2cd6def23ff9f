//! Per-invocation context
//!
//! Holds what every command needs: where the config lives and the
//! cancellation token shared with the Ctrl-C listener.

use std::path::{Path, PathBuf};

use cpenv_core::config::{self, CpenvConfig};
use cpenv_core::{CancellationToken, SyncEngine};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct AppContext {
    config_path: PathBuf,
    cancel: CancellationToken,
}

impl AppContext {
    /// Use `config_override` when given, else the platform default location.
    pub fn new(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(path) => path,
            None => config::default_config_path()?,
        };
        tracing::debug!(config = %config_path.display(), "Using config file");
        Ok(Self::with_config_path(config_path))
    }

    pub fn with_config_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config and resolve the vault root.
    pub fn load(&self) -> Result<(CpenvConfig, PathBuf)> {
        Ok(config::resolve_vault_root(&self.config_path)?)
    }

    /// A [`SyncEngine`] for `project_root` wired to the configured vault,
    /// rules and this context's cancellation token.
    pub fn engine(&self, project_root: &Path) -> Result<SyncEngine> {
        let (config, vault_root) = self.load()?;
        Ok(SyncEngine::new(project_root, vault_root)
            .with_rules(config.rules)
            .with_cancellation(self.cancel.clone()))
    }

    /// Trip the cancellation token on the first Ctrl-C.
    ///
    /// The listener runs on its own thread with a current-thread tokio
    /// runtime, so the rest of the CLI stays synchronous. Copies in flight
    /// finish; the engine stops before the next one.
    pub fn watch_interrupts(&self) {
        let token = self.cancel.clone();
        let spawned = std::thread::Builder::new()
            .name("cpenv-interrupt".into())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        tracing::warn!(error = %e, "Cannot listen for Ctrl-C");
                        return;
                    }
                };
                runtime.block_on(async {
                    match tokio::signal::ctrl_c().await {
                        Ok(()) => {
                            tracing::debug!("Interrupt received");
                            token.cancel();
                        }
                        Err(e) => tracing::warn!(error = %e, "Ctrl-C listener failed"),
                    }
                });
            });

        if let Err(e) = spawned {
            tracing::warn!(error = %e, "Cannot spawn Ctrl-C listener");
        }
    }
}
