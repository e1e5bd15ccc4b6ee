//! Recomposition: fragment files back into canonical profile documents.
//!
//! The profile directory is scanned recursively for fragment files (any
//! `.xml` that is not a scalar meta file); the first path segment below
//! the profile directory names the owning profile. Each profile's
//! fragments are appended to a fresh namespaced `Profile` root, then the
//! previously persisted scalar meta file fills in whatever tags the
//! fragments did not produce. Existing scalar content never overrides a
//! freshly produced element of the same tag.
//!
//! Error policy mirrors decomposition: a profile whose fragments cannot
//! be read or parsed is logged and skipped, write failures are logged per
//! file, and the rest of the run continues.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use xot::Xot;

use crate::defaults::{METADATA_NAMESPACE, PROFILE_FILE_SUFFIX};
use crate::error::{Error, Result};
use crate::writer;
use crate::xml;

/// Combine fragment files under `dir` into canonical profile documents.
///
/// When `allowed` is given, only profiles named in the set participate;
/// otherwise every profile subdirectory does. Output lands directly
/// under `dir` as `<profile>.profile-meta.xml`.
pub fn compose_directory(dir: &Path, allowed: Option<&BTreeSet<String>>) -> Result<()> {
    let fragments = collect_fragments(dir, allowed);
    for (profile, paths) in &fragments {
        if let Err(err) = compose_profile(dir, profile, paths) {
            log::error!("skipping profile {}: {}", profile, err);
        }
    }
    Ok(())
}

/// Gather fragment file paths grouped by owning profile name.
///
/// The walk is sorted so fragments arrive grouped by tag directory and
/// the combined output is deterministic across runs.
fn collect_fragments(
    dir: &Path,
    allowed: Option<&BTreeSet<String>>,
) -> BTreeMap<String, Vec<PathBuf>> {
    let mut fragments: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("unreadable entry under {}: {}", dir.display(), err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if !file_name.ends_with(".xml") || file_name.ends_with(PROFILE_FILE_SUFFIX) {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        // Fragments live under a per-profile subdirectory; a stray .xml
        // directly in the profile directory belongs to no profile.
        if relative.components().count() < 2 {
            log::debug!("ignoring top-level file {}", entry.path().display());
            continue;
        }
        let Some(profile) = relative
            .components()
            .next()
            .and_then(|segment| segment.as_os_str().to_str())
        else {
            continue;
        };
        if allowed.is_some_and(|names| !names.contains(profile)) {
            continue;
        }
        fragments
            .entry(profile.to_string())
            .or_default()
            .push(entry.path().to_path_buf());
    }
    fragments
}

/// Build and write the canonical document for one profile.
fn compose_profile(dir: &Path, profile: &str, paths: &[PathBuf]) -> Result<()> {
    let mut xot = Xot::new();
    let namespace = xot.add_namespace(METADATA_NAMESPACE);
    let root_name = xot.add_name_ns("Profile", namespace);
    let root = xot.new_element(root_name);

    for path in paths {
        let source = fs::read_to_string(path)?;
        let fragment_doc = xot.parse(&source).map_err(|err| Error::Parse {
            path: path.clone(),
            message: err.to_string(),
        })?;
        let fragment = xot.document_element(fragment_doc)?;
        let tag = xml::element_local_name(&xot, fragment)
            .unwrap_or_default()
            .to_string();

        let children = xml::element_children(&xot, fragment);
        if children.is_empty() {
            // A childless fragment carries a single text value.
            let text = xml::text_content(&xot, fragment);
            if !text.is_empty() {
                let name = xot.add_name(&tag);
                let element = xot.new_element(name);
                let text_node = xot.new_text(&text);
                xot.append(element, text_node)?;
                xot.append(root, element)?;
            }
        } else {
            let name = xot.add_name(&tag);
            let wrapper = xot.new_element(name);
            xot.append(root, wrapper)?;
            for child in children {
                xot.append(wrapper, child)?;
            }
        }
    }

    reconcile_scalars(&mut xot, root, dir, profile)?;

    let output_path = dir.join(format!("{profile}{PROFILE_FILE_SUFFIX}"));
    let contents = writer::document_string(&xot, root, Some(METADATA_NAMESPACE));
    match writer::write_file(&output_path, &contents) {
        Ok(()) => log::info!("combined profile {} into {}", profile, output_path.display()),
        Err(err) => log::error!("failed to write {}: {}", output_path.display(), err),
    }
    Ok(())
}

/// Merge the persisted scalar meta file into a freshly built root.
///
/// Every top-level element of the scalar file whose tag is not already
/// present among the root's children is appended; fresh content wins on
/// tag collisions, existing content only fills gaps.
fn reconcile_scalars(xot: &mut Xot, root: xot::Node, dir: &Path, profile: &str) -> Result<()> {
    let scalar_path = dir
        .join(profile)
        .join(format!("{profile}{PROFILE_FILE_SUFFIX}"));
    if !scalar_path.exists() {
        return Ok(());
    }

    let source = fs::read_to_string(&scalar_path)?;
    let existing_doc = xot.parse(&source).map_err(|err| Error::Parse {
        path: scalar_path.clone(),
        message: err.to_string(),
    })?;
    let existing_root = xot.document_element(existing_doc)?;

    let mut present: HashSet<String> = xml::element_children(xot, root)
        .into_iter()
        .filter_map(|child| xml::element_local_name(xot, child).map(str::to_string))
        .collect();

    for element in xml::element_children(xot, existing_root) {
        let Some(tag) = xml::element_local_name(xot, element).map(str::to_string) else {
            continue;
        };
        if present.insert(tag) {
            xot.append(root, element)?;
        }
    }
    Ok(())
}
