//! MGEN Property Tree
//!
//! Rebuilds the nested property hierarchy implied by a job spec's flat,
//! dot-delimited property keys and renders it as indented manifest text.
//!
//! # Core Concepts
//!
//! - [`PropertyRecord`]: one flat `(path, default, description)` declaration
//! - [`PropertyPath`]: validated dotted path
//! - [`PropertyNode`] / [`Leaf`]: tree nodes, unique by name among siblings
//! - [`Forest`]: one root per distinct first segment
//!
//! # Example
//!
//! ```rust
//! use mgen_tree::{build_tree, render_forest, PropertyRecord, RenderOptions};
//!
//! let records = vec![
//!     PropertyRecord::new("storage.backend.type", "ceph"),
//!     PropertyRecord::new("storage.replicas", "3"),
//! ];
//! let forest = build_tree(&records).unwrap();
//! let text = render_forest(&forest, 0, &RenderOptions::new());
//!
//! assert_eq!(text, "storage:\n  replicas: 3\n  backend:\n    type: ceph\n");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod builder;
pub mod error;
pub mod node;
pub mod path;
pub mod record;
pub mod render;

// Re-exports
pub use builder::{build_tree, TreeBuilder};
pub use error::{TreeError, TreeResult};
pub use node::{Forest, Leaf, PropertyNode};
pub use path::PropertyPath;
pub use record::PropertyRecord;
pub use render::{render_forest, render_node, RenderOptions, INDENT_STEP};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
