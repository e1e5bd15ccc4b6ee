//! Element classification and fragment identity resolution.
//!
//! These two pure functions drive both transformation directions:
//!
//! - [`classify`] decides whether a top-level profile element is a
//!   scalar setting (a single text value) or a collection block
//!   (a per-object, per-field, per-app permission group).
//! - [`resolve_name`] derives a stable, human-readable file name for a
//!   collection element from a prioritized list of identifying child
//!   tags.

use xot::{Node, Xot};

use crate::defaults::IDENTIFYING_TAGS;
use crate::xml;

/// Structural kind of a top-level profile element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// A childless element carrying only a text value.
    Scalar,
    /// An element with at least one child element.
    Collection,
}

/// Classify an element as scalar or collection.
///
/// An element is a [`ElementKind::Collection`] iff it has at least one
/// child *element*; whitespace-only text children inserted by pretty
/// printing do not affect the outcome.
pub fn classify(xot: &Xot, node: Node) -> ElementKind {
    let has_element_child = xot
        .children(node)
        .any(|child| xot.element(child).is_some());
    if has_element_child {
        ElementKind::Collection
    } else {
        ElementKind::Scalar
    }
}

/// Resolve the identifying name of a collection element.
///
/// Scans the element's direct children in document order and returns the
/// text of the first child whose local tag name appears anywhere in
/// [`IDENTIFYING_TAGS`]. Document order wins over list order: a
/// lower-priority tag that appears earlier in the document is chosen
/// over a higher-priority tag that appears later.
///
/// Returns `None` when no child matches; callers must surface that as
/// an identity-resolution error naming the file and element, since the
/// fragment file name cannot be derived.
pub fn resolve_name(xot: &Xot, node: Node) -> Option<String> {
    for child in xot.children(node) {
        let Some(local) = xml::element_local_name(xot, child) else {
            continue;
        };
        if IDENTIFYING_TAGS.contains(&local) {
            return Some(xml::text_content(xot, child));
        }
    }
    None
}
