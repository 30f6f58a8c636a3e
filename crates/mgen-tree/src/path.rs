//! Dotted property paths
//!
//! Provides [`PropertyPath`] for addressing a property inside the implied
//! nested hierarchy of a job spec.

use crate::error::TreeError;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Path of a property in the nested hierarchy
///
/// Always holds at least one segment, and no segment is empty.
///
/// # Examples
/// - `storage.backend.size` → `["storage", "backend", "size"]`
/// - `:port` → `["port"]` (one leading colon is dropped)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyPath(Vec<String>);

impl PropertyPath {
    /// Parse a raw spec key into a path
    ///
    /// A single leading `:` is stripped before splitting on `.`; older spec
    /// files carry it on some keys.
    ///
    /// # Errors
    /// Returns [`TreeError::MalformedPath`] when the key is empty or has an
    /// empty segment.
    pub fn parse(raw: &str) -> Result<Self, TreeError> {
        let key = raw.strip_prefix(':').unwrap_or(raw);
        if key.is_empty() {
            return Err(TreeError::malformed(raw, "path has no segments"));
        }

        let segments = key
            .split('.')
            .map(|seg| {
                if seg.is_empty() {
                    Err(TreeError::malformed(raw, "path contains empty segment"))
                } else {
                    Ok(seg.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(segments))
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments (never zero)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Root segment, naming the tree this property belongs to
    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.0[0]
    }

    /// Last segment, naming the leaf
    #[inline]
    #[must_use]
    pub fn leaf(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Segments strictly between the root and the leaf
    ///
    /// Empty for one- and two-segment paths.
    #[inline]
    #[must_use]
    pub fn intermediate(&self) -> &[String] {
        if self.0.len() < 2 {
            &[]
        } else {
            &self.0[1..self.0.len() - 1]
        }
    }

    /// True if the path names a property directly on a root
    #[inline]
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Display for PropertyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for PropertyPath {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
