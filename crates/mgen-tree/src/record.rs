//! Flat property records as declared by a job spec

/// One declared property: dotted path, default value, description
///
/// The path is kept raw; it is validated when the record enters the tree
/// builder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyRecord {
    /// Raw dotted key, e.g. `storage.backend.type`
    pub path: String,
    /// Default value text, may be empty
    pub default: String,
    /// Human readable description, may be empty or span several lines
    pub description: String,
}

impl PropertyRecord {
    /// Create record without description
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default: default.into(),
            description: String::new(),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
