//! Output sinks for the finished manifest
//!
//! The document is written once, whole.

use crate::error::SinkError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "manifest.yml";

/// Destination for a finished manifest
pub trait ManifestSink {
    /// Write the whole document
    ///
    /// # Errors
    /// Returns [`SinkError`] if the destination rejects the write.
    fn write_document(&mut self, document: &str) -> Result<(), SinkError>;
}

/// Writes the manifest to a file, replacing any previous content
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create sink for path
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSink for FileSink {
    fn write_document(&mut self, document: &str) -> Result<(), SinkError> {
        std::fs::write(&self.path, document)
            .map_err(|e| SinkError::io_error(self.path.display().to_string(), e))?;
        tracing::info!(path = %self.path.display(), bytes = document.len(), "wrote manifest");
        Ok(())
    }
}

/// Writes the manifest to any [`std::io::Write`] (stdout, buffers)
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    label: String,
}

impl<W: Write> WriterSink<W> {
    /// Create sink; `label` names the target in errors
    #[inline]
    #[must_use]
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    /// Recover the writer
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ManifestSink for WriterSink<W> {
    fn write_document(&mut self, document: &str) -> Result<(), SinkError> {
        self.writer
            .write_all(document.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| SinkError::io_error(self.label.clone(), e))
    }
}
