use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures loading a theme document.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid theme JSON")]
    Parse(#[from] serde_json::Error),
}
