//! Error types for job spec discovery and decoding
//!
//! Covers:
//! - Filesystem failures (jobs directory, spec files)
//! - YAML syntax errors
//! - Property declarations that cannot become records

use std::path::PathBuf;

/// Errors while locating or decoding job specs
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// The release root has no `jobs/` directory
    #[error("jobs directory not found: {}", .0.display())]
    MissingJobsDir(PathBuf),

    /// IO error during directory listing or file read
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spec file is not valid YAML or has the wrong shape
    #[error("yaml error in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Spec file holds no document
    #[error("empty job spec: {}", .0.display())]
    EmptySpec(PathBuf),

    /// A property entry cannot be turned into a record
    #[error("invalid property '{key}' in job '{job}': {reason}")]
    InvalidProperty {
        job: String,
        key: String,
        reason: String,
    },
}

impl SpecError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create YAML error for path
    pub fn yaml_error(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.into(),
            source,
        }
    }

    /// Create invalid property error
    pub fn invalid_property(
        job: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidProperty {
            job: job.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for spec operations
pub type SpecResult<T> = Result<T, SpecError>;
