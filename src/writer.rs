//! Canonical XML serialization.
//!
//! Both transformation directions write through this module so the same
//! logical document always produces the same bytes, no matter which side
//! built it. That stability is what makes the decomposed layout useful
//! under version control.
//!
//! The format is fixed: a single XML declaration line, 4-space
//! indentation, no blank lines, and a trailing newline. Element tags are
//! emitted as local names only, which is how fragment and scalar meta
//! files end up namespace-free; canonical documents get a default
//! `xmlns` declaration on the outermost element when one is requested.

use std::fs;
use std::path::Path;

use xot::{Node, Xot};

use crate::error::Result;
use crate::xml;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const INDENT: &str = "    ";

/// Serialize an element subtree as a complete document.
///
/// When `namespace` is `Some`, a default `xmlns` declaration is written
/// on the outermost element only; descendants inherit it. Inter-element
/// whitespace from previously pretty-printed input is discarded, so
/// re-serializing a parsed document is byte-stable.
pub fn document_string(xot: &Xot, root: Node, namespace: Option<&str>) -> String {
    let mut out = String::from(XML_DECLARATION);
    write_element(xot, root, namespace, 0, &mut out);
    out
}

/// Write serialized contents to a file, truncating any previous version.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}

fn write_element(xot: &Xot, node: Node, namespace: Option<&str>, depth: usize, out: &mut String) {
    let Some(tag) = xml::element_local_name(xot, node) else {
        return;
    };

    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push('<');
    out.push_str(tag);
    if let Some(uri) = namespace {
        out.push_str(" xmlns=\"");
        push_escaped(uri, true, out);
        out.push('"');
    }

    let children = xml::element_children(xot, node);
    if children.is_empty() {
        let text = xml::text_content(xot, node);
        if text.is_empty() {
            out.push_str("/>\n");
        } else {
            out.push('>');
            push_escaped(&text, false, out);
            out.push_str("</");
            out.push_str(tag);
            out.push_str(">\n");
        }
    } else {
        out.push_str(">\n");
        for child in children {
            write_element(xot, child, None, depth + 1, out);
        }
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push_str(">\n");
    }
}

fn push_escaped(value: &str, in_attribute: bool, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
