//! CLI error types.

use rw_tabbed::ConfigError;

use crate::script::ScriptError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Script(#[from] ScriptError),

    #[error("{0}")]
    Replay(String),
}
