//! Tree renderer: forest → indented manifest text
//!
//! Output per node, depth-first:
//!
//! ```text
//! <indent>name:
//! <indent+2># description line      (only with descriptions enabled)
//! <indent+2>leaf: value
//! <indent+2>child:
//! ...
//! ```

use crate::node::{Forest, Leaf, PropertyNode};
use std::fmt::Write;

/// Spaces added per nesting level
pub const INDENT_STEP: usize = 2;

/// Rendering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Emit leaf descriptions as `#` comment lines above the leaf
    pub descriptions: bool,
}

impl RenderOptions {
    /// Create default options (no descriptions)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With description comments enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_descriptions(mut self, enabled: bool) -> Self {
        self.descriptions = enabled;
        self
    }
}

/// Render one node and its subtree, header at `base_indent` spaces
#[must_use]
pub fn render_node(node: &PropertyNode, base_indent: usize, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_node(&mut out, node, base_indent, options);
    out
}

/// Render every root of a forest in forest order
#[must_use]
pub fn render_forest(forest: &Forest, base_indent: usize, options: &RenderOptions) -> String {
    let mut out = String::new();
    for root in forest.roots() {
        write_node(&mut out, root, base_indent, options);
    }
    out
}

fn write_node(out: &mut String, node: &PropertyNode, indent: usize, options: &RenderOptions) {
    push_line(out, indent, format_args!("{}:", node.name()));

    let inner = indent + INDENT_STEP;
    for leaf in node.leaves() {
        write_leaf(out, leaf, inner, options);
    }
    for child in node.children() {
        write_node(out, child, inner, options);
    }
}

fn write_leaf(out: &mut String, leaf: &Leaf, indent: usize, options: &RenderOptions) {
    if options.descriptions && !leaf.description().is_empty() {
        for line in leaf.description().lines() {
            let line = line.trim_end();
            if line.is_empty() {
                push_line(out, indent, format_args!("#"));
            } else {
                push_line(out, indent, format_args!("# {line}"));
            }
        }
    }
    push_line(out, indent, format_args!("{}", leaf.rendered_key()));
}

fn push_line(out: &mut String, indent: usize, text: std::fmt::Arguments<'_>) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{:indent$}{text}", "");
}
