//! Error types for manifest generation
//!
//! Provides error handling for:
//! - Deployment config loading
//! - Per-job failures under the abort policy
//! - Writing the finished document

use mgen_spec::SpecError;
use mgen_tree::TreeError;
use std::path::PathBuf;

/// Errors while loading a deployment config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during config read
    #[error("io error reading config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML config could not be decoded
    #[error("invalid yaml config {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// TOML config could not be decoded
    #[error("invalid toml config {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config file extension not recognised
    #[error("unsupported config format: {} (expected .yml, .yaml or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Errors during manifest output (egress)
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// IO error during write
    #[error("io error writing {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    /// Create IO error for a named target
    pub fn io_error(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            target: target.into(),
            source,
        }
    }
}

/// Why a single job could not be rendered
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// Spec could not be read or decoded
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// A property path was malformed
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Combined manifest generation error
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Run-level source failure (e.g. no jobs directory)
    #[error("spec source error: {0}")]
    Spec(#[from] SpecError),

    /// A job failed under the abort policy
    #[error("job '{job}' failed: {source}")]
    JobFailed {
        job: String,
        #[source]
        source: JobError,
    },

    /// Deployment config file could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Finished document could not be written
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

impl ManifestError {
    /// Create job failure error
    pub fn job_failed(job: impl Into<String>, source: impl Into<JobError>) -> Self {
        Self::JobFailed {
            job: job.into(),
            source: source.into(),
        }
    }
}

/// Result type alias for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;
