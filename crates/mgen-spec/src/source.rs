//! Spec sources
//!
//! [`SpecSource`] separates run-level failures (no jobs directory) from
//! per-job failures (one unreadable spec), so the caller can decide whether
//! a bad job skips or aborts.

use crate::discovery::{discover_jobs, JobSpecFile};
use crate::error::{SpecError, SpecResult};
use crate::job::JobSpec;
use std::path::{Path, PathBuf};

/// Outcome of loading one job
#[derive(Debug)]
pub struct JobEntry {
    /// Identifier of the job at its source (directory name for files)
    pub id: String,
    /// Decoded spec, or why it could not be loaded
    pub spec: SpecResult<JobSpec>,
}

impl JobEntry {
    /// Successfully loaded job
    #[inline]
    #[must_use]
    pub fn loaded(id: impl Into<String>, spec: JobSpec) -> Self {
        Self {
            id: id.into(),
            spec: Ok(spec),
        }
    }

    /// Job that failed to load
    #[inline]
    #[must_use]
    pub fn failed(id: impl Into<String>, error: SpecError) -> Self {
        Self {
            id: id.into(),
            spec: Err(error),
        }
    }
}

/// Source of job specs
pub trait SpecSource {
    /// Load every job in source order
    ///
    /// # Errors
    /// Only run-level failures; per-job failures are reported inside the
    /// returned entries.
    fn jobs(&self) -> SpecResult<Vec<JobEntry>>;
}

/// Reads `<root>/jobs/*/spec` from the filesystem
#[derive(Debug, Clone)]
pub struct FsSpecSource {
    root: PathBuf,
}

impl FsSpecSource {
    /// Create source for a release root
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Release root this source reads from
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load(job: &JobSpecFile) -> SpecResult<JobSpec> {
        let content = std::fs::read_to_string(&job.spec_path)
            .map_err(|e| SpecError::io_error(&job.spec_path, e))?;
        JobSpec::from_yaml_str(&content, &job.dir_name, &job.spec_path)
    }
}

impl SpecSource for FsSpecSource {
    fn jobs(&self) -> SpecResult<Vec<JobEntry>> {
        let files = discover_jobs(&self.root)?;
        Ok(files
            .into_iter()
            .map(|file| {
                let spec = Self::load(&file);
                JobEntry {
                    id: file.dir_name,
                    spec,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{JOBS_DIR, SPEC_FILE};

    fn write_spec(root: &Path, job: &str, content: &str) {
        let dir = root.join(JOBS_DIR).join(job);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SPEC_FILE), content).unwrap();
    }

    #[test]
    fn loads_all_valid_jobs() {
        let tmp = tempfile::tempdir().unwrap();
        write_spec(tmp.path(), "b", "name: b\nproperties:\n  x.y:\n    default: 1\n");
        write_spec(tmp.path(), "a", "name: a\n");

        let entries = FsSpecSource::new(tmp.path()).jobs().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "a");
        assert_eq!(entries[1].spec.as_ref().unwrap().properties.len(), 1);
    }

    #[test]
    fn missing_spec_file_is_per_job_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_spec(tmp.path(), "good", "name: good\n");
        std::fs::create_dir_all(tmp.path().join(JOBS_DIR).join("broken")).unwrap();

        let entries = FsSpecSource::new(tmp.path()).jobs().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "broken");
        assert!(matches!(entries[0].spec, Err(SpecError::Io { .. })));
        assert!(entries[1].spec.is_ok());
    }

    #[test]
    fn missing_root_is_run_level_error() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FsSpecSource::new(tmp.path().join("nope"));
        assert!(matches!(source.jobs(), Err(SpecError::MissingJobsDir(_))));
    }
}
