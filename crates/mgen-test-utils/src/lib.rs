//! Testing utilities for the MGEN workspace
//!
//! Shared fixtures: release directories on disk and in-memory spec sources.

#![allow(missing_docs)]

use mgen_spec::{JobEntry, JobSpec, SpecError, SpecResult, SpecSource, JOBS_DIR, SPEC_FILE};
use mgen_tree::PropertyRecord;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn record(path: &str, default: &str) -> PropertyRecord {
    PropertyRecord::new(path, default)
}

pub fn described(path: &str, default: &str, description: &str) -> PropertyRecord {
    PropertyRecord::new(path, default).with_description(description)
}

/// Release root in a temp dir, removed on drop
pub struct ReleaseFixture {
    dir: TempDir,
}

impl ReleaseFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(JOBS_DIR)).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn job_dir(&self, job: &str) -> PathBuf {
        self.root().join(JOBS_DIR).join(job)
    }

    /// Write raw spec text for a job
    pub fn with_spec(self, job: &str, content: &str) -> Self {
        let dir = self.job_dir(job);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SPEC_FILE), content).unwrap();
        self
    }

    /// Job directory with no spec file in it
    pub fn with_unreadable_job(self, job: &str) -> Self {
        std::fs::create_dir_all(self.job_dir(job)).unwrap();
        self
    }
}

impl Default for ReleaseFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Spec text for a job with `(key, default, description)` properties
pub fn spec_yaml(name: &str, properties: &[(&str, &str, &str)]) -> String {
    if properties.is_empty() {
        return format!("---\nname: {name}\nproperties: {{}}\n");
    }
    let mut out = format!("---\nname: {name}\ntemplates:\n  ctl.erb: bin/ctl\nproperties:\n");
    for (key, default, description) in properties {
        out.push_str(&format!("  \"{key}\":\n"));
        if !default.is_empty() {
            out.push_str(&format!("    default: \"{default}\"\n"));
        }
        if !description.is_empty() {
            out.push_str("    description: |\n");
            for line in description.lines() {
                out.push_str(&format!("      {line}\n"));
            }
        }
    }
    out
}

/// In-memory source; `None` specs load as failures
#[derive(Default)]
pub struct InMemorySource {
    jobs: Vec<(String, Option<JobSpec>)>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job(mut self, spec: JobSpec) -> Self {
        self.jobs.push((spec.name.clone(), Some(spec)));
        self
    }

    pub fn with_failed_job(mut self, id: &str) -> Self {
        self.jobs.push((id.to_string(), None));
        self
    }
}

impl SpecSource for InMemorySource {
    fn jobs(&self) -> SpecResult<Vec<JobEntry>> {
        Ok(self
            .jobs
            .iter()
            .map(|(id, spec)| match spec {
                Some(spec) => JobEntry::loaded(id.clone(), spec.clone()),
                None => JobEntry::failed(
                    id.clone(),
                    SpecError::io_error(
                        id,
                        std::io::Error::new(std::io::ErrorKind::NotFound, "spec missing"),
                    ),
                ),
            })
            .collect())
    }
}
