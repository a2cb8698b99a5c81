//! Error types for the shader standard tool
//!
//! The validation path never returns errors: missing shader files,
//! unrecognized variables, and type mismatches are reported on the console
//! and recovered locally. The only fatal failures are I/O errors while
//! writing generated artifacts.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shader standard operations
pub type Result<T> = std::result::Result<T, StandardError>;

/// Main error type for the shader standard tool
#[derive(Error, Debug)]
pub enum StandardError {
    #[error("failed to write generated artifact '{}'", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StandardError {
    /// Create an artifact write error for the given output path
    pub fn artifact_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ArtifactWrite {
            path: path.into(),
            source,
        }
    }
}
