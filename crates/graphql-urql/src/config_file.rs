use libgraphql_urql::UrqlCodegenConfig;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Load a JSON [`UrqlCodegenConfig`] from disk.
pub(crate) fn load(path: &Path) -> Result<UrqlCodegenConfig, ConfigLoadError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| ConfigLoadError::ReadError {
            path: path.to_path_buf(),
            err,
        })?;
    serde_json::from_str(content.as_str())
        .map_err(|err| ConfigLoadError::InvalidConfig {
            path: path.to_path_buf(),
            err,
        })
}

#[derive(Debug, Error)]
pub(crate) enum ConfigLoadError {
    #[error("Invalid config file {path:?}: {err}")]
    InvalidConfig {
        path: PathBuf,
        err: serde_json::Error,
    },

    #[error("Failed to read config file {path:?}: {err}")]
    ReadError {
        path: PathBuf,
        err: std::io::Error,
    },
}
