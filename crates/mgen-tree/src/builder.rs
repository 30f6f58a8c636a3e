//! Tree builder: flat records → ordered forest
//!
//! Each record contributes exactly one leaf. The root is keyed by the first
//! path segment; every intermediate segment resolves to a child of the
//! previous node, created on first sight and reused afterwards.

use crate::error::TreeResult;
use crate::node::{Forest, Leaf};
use crate::path::PropertyPath;
use crate::record::PropertyRecord;

/// Incremental forest builder
#[derive(Debug, Default)]
pub struct TreeBuilder {
    forest: Forest,
    records: usize,
}

impl TreeBuilder {
    /// Create empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record to the forest
    ///
    /// # Errors
    /// Returns [`crate::TreeError::MalformedPath`] if the record's path is
    /// empty or has an empty segment; the forest is left untouched.
    pub fn insert(&mut self, record: &PropertyRecord) -> TreeResult<()> {
        let path = PropertyPath::parse(&record.path)?;
        let leaf = Leaf::new(path.leaf(), &*record.default, &*record.description);

        let root = self.forest.root_or_insert(path.root());
        if path.is_single() {
            root.push_leaf(leaf);
        } else {
            let parent = path
                .intermediate()
                .iter()
                .fold(root, |node, segment| node.child_or_insert(segment));
            parent.push_leaf(leaf);
        }

        self.records += 1;
        tracing::trace!(path = %path, "inserted property");
        Ok(())
    }

    /// Number of records inserted so far
    #[inline]
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Finish building
    #[inline]
    #[must_use]
    pub fn finish(self) -> Forest {
        self.forest
    }
}

/// Build a forest from a record sequence
///
/// Fails fast on the first malformed path.
///
/// # Errors
/// Returns [`crate::TreeError::MalformedPath`] naming the offending path.
pub fn build_tree<'a, I>(records: I) -> TreeResult<Forest>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let mut builder = TreeBuilder::new();
    for record in records {
        builder.insert(record)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;

    #[test]
    fn two_level_records_share_root() {
        let records = vec![PropertyRecord::new("a.b", "1"), PropertyRecord::new("a.c", "")];
        let forest = build_tree(&records).unwrap();

        assert_eq!(forest.len(), 1);
        let a = forest.root("a").unwrap();
        assert!(a.children().is_empty());
        let keys: Vec<_> = a.leaves().iter().map(Leaf::rendered_key).collect();
        assert_eq!(keys, vec!["b: 1", "c: \"\""]);
    }

    #[test]
    fn three_level_records_create_intermediate_nodes() {
        let records = vec![
            PropertyRecord::new("a.b.x", "1"),
            PropertyRecord::new("a.c.y", ""),
        ];
        let forest = build_tree(&records).unwrap();

        let a = forest.root("a").unwrap();
        assert!(a.leaves().is_empty());
        assert_eq!(a.children().len(), 2);
        assert_eq!(a.child("b").unwrap().leaves()[0].rendered_key(), "x: 1");
        assert_eq!(a.child("c").unwrap().leaves()[0].rendered_key(), "y: \"\"");
    }

    #[test]
    fn single_segment_attaches_to_root() {
        let records = vec![PropertyRecord::new("x", "5")];
        let forest = build_tree(&records).unwrap();

        let x = forest.root("x").unwrap();
        assert!(x.children().is_empty());
        assert_eq!(x.leaves().len(), 1);
        assert_eq!(x.leaves()[0].rendered_key(), "x: 5");
    }

    #[test]
    fn shared_prefix_in_reverse_order_yields_one_node() {
        let records = vec![
            PropertyRecord::new("net.host.port", "80"),
            PropertyRecord::new("net.host.addr", "0.0.0.0"),
        ];
        let forest = build_tree(records.iter().rev()).unwrap();

        let net = forest.root("net").unwrap();
        assert_eq!(net.children().len(), 1);
        let host = net.child("host").unwrap();
        let keys: Vec<_> = host.leaves().iter().map(Leaf::rendered_key).collect();
        assert_eq!(keys, vec!["addr: 0.0.0.0", "port: 80"]);
    }

    #[test]
    fn deep_paths_reuse_every_level() {
        let records = vec![
            PropertyRecord::new("s.b.c.d", "1"),
            PropertyRecord::new("s.b.c.e", "2"),
            PropertyRecord::new("s.b.f", "3"),
        ];
        let forest = build_tree(&records).unwrap();

        let b = forest.root("s").unwrap().child("b").unwrap();
        assert_eq!(b.children().len(), 1);
        assert_eq!(b.leaves()[0].rendered_key(), "f: 3");
        assert_eq!(b.child("c").unwrap().leaves().len(), 2);
    }

    #[test]
    fn leading_colon_stripped() {
        let records = vec![PropertyRecord::new(":a.b", "1"), PropertyRecord::new("a.c", "2")];
        let forest = build_tree(&records).unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.root("a").unwrap().leaves().len(), 2);
    }

    #[test]
    fn description_is_carried() {
        let records = vec![PropertyRecord::new("a.b", "1").with_description("the b")];
        let forest = build_tree(&records).unwrap();
        assert_eq!(forest.root("a").unwrap().leaves()[0].description(), "the b");
    }

    #[test]
    fn empty_path_fails_fast() {
        let records = vec![PropertyRecord::new("a.b", "1"), PropertyRecord::new("", "2")];
        let err = build_tree(&records).unwrap_err();
        assert!(matches!(err, TreeError::MalformedPath { ref path, .. } if path.is_empty()));
    }

    #[test]
    fn malformed_record_leaves_builder_untouched() {
        let mut builder = TreeBuilder::new();
        builder.insert(&PropertyRecord::new("a.b", "1")).unwrap();
        assert!(builder.insert(&PropertyRecord::new("a..c", "2")).is_err());
        assert_eq!(builder.record_count(), 1);

        let forest = builder.finish();
        assert_eq!(forest.leaf_count(), 1);
        assert!(forest.root("a").unwrap().children().is_empty());
    }

    #[test]
    fn empty_input_gives_empty_forest() {
        let forest = build_tree(&Vec::<PropertyRecord>::new()).unwrap();
        assert!(forest.is_empty());
    }
}
