//! Manifest generator
//!
//! Drives every job from a [`SpecSource`] through the tree builder and
//! renderer, applies the configured [`ErrorPolicy`], and assembles the
//! document.
//!
//! # Workflow
//! 1. Ask the source for all jobs (run-level failure aborts)
//! 2. Per job: decode outcome → build forest → optional sort
//! 3. Failed job: skip with a warning, or abort
//! 4. Render header, instance group and job blocks

use crate::config::{ErrorPolicy, GeneratorConfig, Ordering};
use crate::document::{render_manifest, JobBlock};
use crate::error::{JobError, ManifestError, ManifestResult};
use crate::sink::ManifestSink;
use mgen_spec::{JobSpec, SpecSource};
use mgen_tree::build_tree;

/// A job left out of the manifest and why
#[derive(Debug)]
pub struct SkippedJob {
    /// Job identifier at the source
    pub id: String,
    /// Cause
    pub error: JobError,
}

/// Result of one generation run
#[derive(Debug)]
pub struct GenerationReport {
    /// Finished manifest text
    pub document: String,
    /// Jobs rendered into the manifest, in order
    pub rendered: Vec<String>,
    /// Jobs left out under [`ErrorPolicy::Skip`]
    pub skipped: Vec<SkippedJob>,
}

impl GenerationReport {
    /// True if no job was skipped
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Turns job specs into a deployment manifest
#[derive(Debug, Clone, Default)]
pub struct ManifestGenerator {
    config: GeneratorConfig,
}

impl ManifestGenerator {
    /// Create generator
    #[inline]
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build one job block from a decoded spec
    ///
    /// # Errors
    /// Returns [`JobError::Tree`] if a property path is malformed.
    pub fn job_block(&self, spec: &JobSpec) -> Result<JobBlock, JobError> {
        let mut forest = build_tree(&spec.properties)?;
        if self.config.ordering == Ordering::Sorted {
            forest.sort_by_name();
        }
        Ok(JobBlock::new(spec.name.clone(), forest))
    }

    /// Generate the manifest text
    ///
    /// # Errors
    /// Run-level source failures always; per-job failures only under
    /// [`ErrorPolicy::Abort`].
    pub fn generate<S: SpecSource + ?Sized>(&self, source: &S) -> ManifestResult<GenerationReport> {
        let entries = source.jobs()?;

        let mut blocks = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for entry in entries {
            let outcome = entry
                .spec
                .map_err(JobError::from)
                .and_then(|spec| self.job_block(&spec));

            match outcome {
                Ok(block) => {
                    tracing::debug!(
                        job = %block.name,
                        roots = block.properties.len(),
                        leaves = block.properties.leaf_count(),
                        "rendered job"
                    );
                    blocks.push(block);
                }
                Err(error) => match self.config.policy {
                    ErrorPolicy::Abort => return Err(ManifestError::job_failed(entry.id, error)),
                    ErrorPolicy::Skip => {
                        tracing::warn!(job = %entry.id, error = %error, "skipping job");
                        skipped.push(SkippedJob { id: entry.id, error });
                    }
                },
            }
        }

        let document = render_manifest(&self.config.deployment, &blocks, &self.config.render);
        let rendered: Vec<String> = blocks.into_iter().map(|b| b.name).collect();

        tracing::info!(
            rendered = rendered.len(),
            skipped = skipped.len(),
            "generated manifest"
        );

        Ok(GenerationReport {
            document,
            rendered,
            skipped,
        })
    }

    /// Generate and hand the document to a sink
    ///
    /// Nothing is written if generation fails.
    ///
    /// # Errors
    /// Everything [`Self::generate`] returns, plus [`ManifestError::Sink`].
    pub fn generate_into<S, K>(&self, source: &S, sink: &mut K) -> ManifestResult<GenerationReport>
    where
        S: SpecSource + ?Sized,
        K: ManifestSink + ?Sized,
    {
        let report = self.generate(source)?;
        sink.write_document(&report.document)?;
        Ok(report)
    }
}
