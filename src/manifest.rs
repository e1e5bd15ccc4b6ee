//! Package manifest reader.
//!
//! A `package.xml` manifest lists metadata members grouped under `types`
//! elements, each carrying one `name` child and zero or more `members`
//! children. Only `types` whose name equals the profile type marker are
//! consulted; every `members` text is one profile name.
//!
//! The `combine` command uses the resulting set to restrict which profile
//! directories participate in recomposition.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use xot::Xot;

use crate::defaults::PROFILE_TYPE_NAME;
use crate::error::{Error, Result};
use crate::xml;

/// Read the set of profile names declared in a package manifest.
///
/// Tag matching is by local name, so manifests with or without the
/// metadata namespace declaration are both accepted. An empty set is not
/// an error at this layer; the caller decides whether an empty manifest
/// means "nothing to do".
pub fn profile_names(path: &Path) -> Result<BTreeSet<String>> {
    let source = fs::read_to_string(path)?;
    let mut xot = Xot::new();
    let doc = xot.parse(&source).map_err(|err| Error::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let root = xot.document_element(doc)?;

    let mut names = BTreeSet::new();
    for types in xml::element_children(&xot, root) {
        if xml::element_local_name(&xot, types) != Some("types") {
            continue;
        }
        let children = xml::element_children(&xot, types);
        let is_profile_type = children.iter().any(|&child| {
            xml::element_local_name(&xot, child) == Some("name")
                && xml::text_content(&xot, child).trim() == PROFILE_TYPE_NAME
        });
        if !is_profile_type {
            continue;
        }
        for &member in &children {
            if xml::element_local_name(&xot, member) != Some("members") {
                continue;
            }
            let text = xml::text_content(&xot, member);
            let text = text.trim();
            if !text.is_empty() {
                names.insert(text.to_string());
            }
        }
    }
    Ok(names)
}
