//! Error taxonomy for the generator.

use std::path::PathBuf;

/// Errors produced while rendering or writing the generated configuration.
#[derive(Debug, thiserror::Error)]
pub enum MatrixGenError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("io error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, MatrixGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = MatrixGenError::Io {
            path: PathBuf::from("/nope/.travis.yml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/.travis.yml"));
        assert!(msg.contains("io error"));
    }
}
