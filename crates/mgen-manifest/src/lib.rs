//! MGEN Manifest
//!
//! Assembles a deployment manifest with one instance group that runs every
//! discovered job, each with its property tree expanded and defaulted.
//!
//! # Example
//!
//! ```rust,ignore
//! use mgen_manifest::{FileSink, GeneratorConfig, ManifestGenerator};
//! use mgen_spec::FsSpecSource;
//!
//! let generator = ManifestGenerator::new(GeneratorConfig::new().with_descriptions(true));
//! let report = generator.generate_into(
//!     &FsSpecSource::new("my-release"),
//!     &mut FileSink::new("manifest.yml"),
//! )?;
//! println!("{} jobs, {} skipped", report.rendered.len(), report.skipped.len());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod sink;

// Re-exports for convenience
pub use config::{DeploymentConfig, ErrorPolicy, GeneratorConfig, InstanceGroupConfig, Ordering};
pub use document::{render_manifest, JobBlock, JOB_FIELD_INDENT, JOB_INDENT, PROPERTY_INDENT};
pub use error::{ConfigError, JobError, ManifestError, ManifestResult, SinkError};
pub use generator::{GenerationReport, ManifestGenerator, SkippedJob};
pub use sink::{FileSink, ManifestSink, WriterSink, DEFAULT_OUTPUT};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for generating manifests
    pub use crate::{
        DeploymentConfig, ErrorPolicy, FileSink, GeneratorConfig, ManifestGenerator, ManifestSink,
        Ordering,
    };
    pub use mgen_spec::{FsSpecSource, SpecSource};
    pub use mgen_tree::RenderOptions;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
