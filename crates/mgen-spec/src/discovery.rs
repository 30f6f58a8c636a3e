//! Job discovery under a release root
//!
//! Layout: `<root>/jobs/<job>/spec`. Jobs are returned sorted by directory
//! name so output is stable across runs and platforms.

use crate::error::{SpecError, SpecResult};
use std::path::{Path, PathBuf};

/// Name of the directory holding job definitions
pub const JOBS_DIR: &str = "jobs";

/// File name of a job's spec inside its directory
pub const SPEC_FILE: &str = "spec";

/// A job directory found under `jobs/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpecFile {
    /// Directory name of the job
    pub dir_name: String,
    /// Path of the job's spec file (may not exist)
    pub spec_path: PathBuf,
}

/// List job directories under `<root>/jobs`
///
/// # Errors
/// [`SpecError::MissingJobsDir`] if `<root>/jobs` is not a directory,
/// [`SpecError::Io`] if it cannot be listed.
pub fn discover_jobs(root: &Path) -> SpecResult<Vec<JobSpecFile>> {
    let jobs_dir = root.join(JOBS_DIR);
    if !jobs_dir.is_dir() {
        return Err(SpecError::MissingJobsDir(jobs_dir));
    }

    let entries = std::fs::read_dir(&jobs_dir).map_err(|e| SpecError::io_error(&jobs_dir, e))?;

    let mut jobs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SpecError::io_error(&jobs_dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            tracing::debug!(entry = %path.display(), "skipping non-directory entry");
            continue;
        }
        jobs.push(JobSpecFile {
            dir_name: entry.file_name().to_string_lossy().into_owned(),
            spec_path: path.join(SPEC_FILE),
        });
    }

    jobs.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    tracing::debug!(dir = %jobs_dir.display(), count = jobs.len(), "discovered jobs");
    Ok(jobs)
}
