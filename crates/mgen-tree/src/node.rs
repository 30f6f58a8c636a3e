//! Property nodes, leaves and the per-job forest

use indexmap::IndexMap;

/// A `name: value` entry attached to the node of its parent path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    name: String,
    default: String,
    description: String,
}

impl Leaf {
    /// Create leaf from last path segment, default and description
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            description: description.into(),
        }
    }

    /// Last segment of the originating path
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default value as declared
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Description, possibly empty
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Rendered `name: value` text
    ///
    /// An empty default renders as `""`; anything else is emitted verbatim.
    #[must_use]
    pub fn rendered_key(&self) -> String {
        if self.default.is_empty() {
            format!("{}: \"\"", self.name)
        } else {
            format!("{}: {}", self.name, self.default)
        }
    }
}

/// Node of the reconstructed property hierarchy
///
/// Children are exclusively owned and unique by name among siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    name: String,
    children: Vec<PropertyNode>,
    leaves: Vec<Leaf>,
}

impl PropertyNode {
    /// Create empty node
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            leaves: Vec::new(),
        }
    }

    /// Segment name this node represents
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child nodes in first-seen order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[PropertyNode] {
        &self.children
    }

    /// Leaves in insertion order
    #[inline]
    #[must_use]
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Find direct child by name
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&PropertyNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Get child by name, creating it at the end if absent
    pub fn child_or_insert(&mut self, name: &str) -> &mut PropertyNode {
        let idx = match self.children.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.children.push(PropertyNode::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    /// Append a leaf
    #[inline]
    pub fn push_leaf(&mut self, leaf: Leaf) {
        self.leaves.push(leaf);
    }

    /// Total leaves in this subtree
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
            + self
                .children
                .iter()
                .map(PropertyNode::leaf_count)
                .sum::<usize>()
    }

    /// Sort children and leaves by name, recursively (stable)
    pub fn sort_by_name(&mut self) {
        self.leaves.sort_by(|a, b| a.name.cmp(&b.name));
        self.children.sort_by(|a, b| a.name.cmp(&b.name));
        for child in &mut self.children {
            child.sort_by_name();
        }
    }
}

/// The set of root trees built for one job, keyed by root name
///
/// Roots keep first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Forest {
    roots: IndexMap<String, PropertyNode>,
}

impl Forest {
    /// Create empty forest
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get root by name
    #[inline]
    #[must_use]
    pub fn root(&self, name: &str) -> Option<&PropertyNode> {
        self.roots.get(name)
    }

    /// Get root by name, creating it if absent
    pub fn root_or_insert(&mut self, name: &str) -> &mut PropertyNode {
        self.roots
            .entry(name.to_string())
            .or_insert_with(|| PropertyNode::new(name))
    }

    /// Iterate roots in forest order
    pub fn roots(&self) -> impl Iterator<Item = &PropertyNode> {
        self.roots.values()
    }

    /// Number of roots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True if no property was added
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total leaves across all roots
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.roots.values().map(PropertyNode::leaf_count).sum()
    }

    /// Sort roots, then every subtree, by name
    pub fn sort_by_name(&mut self) {
        self.roots.sort_keys();
        for root in self.roots.values_mut() {
            root.sort_by_name();
        }
    }
}
