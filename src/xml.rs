//! Thin helpers over the `xot` XML tree.
//!
//! Qualified names are compared structurally through xot's interned
//! `NameId`s, which resolve to a (local name, namespace URI) pair. The
//! rest of the crate never inspects namespace syntax in raw tag strings.

use xot::{NameId, Node, Xot};

/// Local (unqualified) part of an interned name.
pub fn local_name(xot: &Xot, name: NameId) -> &str {
    xot.name_ns_str(name).0
}

/// Namespace URI of an interned name, or the empty string when the name
/// is not in any namespace.
pub fn namespace_uri(xot: &Xot, name: NameId) -> &str {
    xot.name_ns_str(name).1
}

/// The name of a node, if it is an element.
pub fn element_name(xot: &Xot, node: Node) -> Option<NameId> {
    xot.element(node).map(|element| element.name())
}

/// Local tag name of a node, if it is an element.
pub fn element_local_name(xot: &Xot, node: Node) -> Option<&str> {
    element_name(xot, node).map(|name| local_name(xot, name))
}

/// Direct element children of a node, skipping text and comment nodes.
pub fn element_children(xot: &Xot, node: Node) -> Vec<Node> {
    xot.children(node)
        .filter(|&child| xot.element(child).is_some())
        .collect()
}

/// Concatenated text of a node's direct text children.
///
/// For a childless element this is its value; for an element with
/// children it is typically the whitespace the pretty-printer inserted.
pub fn text_content(xot: &Xot, node: Node) -> String {
    xot.children(node)
        .filter_map(|child| xot.text_str(child))
        .collect()
}
