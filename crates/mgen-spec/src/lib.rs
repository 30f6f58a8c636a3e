//! MGEN Spec Source
//!
//! The boundary between a release directory on disk and the flat property
//! records the tree builder consumes.
//!
//! # Architecture
//!
//! ```text
//! <root>/jobs/*/spec → discover_jobs → JobSpec::from_yaml_str → Vec<PropertyRecord>
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod discovery;
pub mod error;
pub mod job;
pub mod source;

// Re-exports for convenience
pub use discovery::{discover_jobs, JobSpecFile, JOBS_DIR, SPEC_FILE};
pub use error::{SpecError, SpecResult};
pub use job::JobSpec;
pub use source::{FsSpecSource, JobEntry, SpecSource};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
