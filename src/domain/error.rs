//! Load-time error types.

use std::path::{Path, PathBuf};

/// Failure to load an INI file. Lookups never fail; this is the only error
/// the crate produces.
#[derive(Debug, thiserror::Error)]
pub enum IniError {
    #[error("INI file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read INI file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IniError {
    /// The path that was being loaded when the error occurred.
    pub fn path(&self) -> &Path {
        match self {
            IniError::NotFound { path } | IniError::Read { path, .. } => path,
        }
    }

    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        use std::io::ErrorKind;

        if matches!(source.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) {
            IniError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            IniError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
