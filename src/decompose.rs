//! Decomposition: canonical profile documents into fragment files.
//!
//! For every `<name>.profile-meta.xml` directly under the profile
//! directory, each top-level collection element is written to its own
//! fragment file at `<name>/<tag>/<resolvedName>.<tag>-meta.xml`, and all
//! scalar settings are gathered into one scalar meta file at
//! `<name>/<name>.profile-meta.xml`. Fragment and scalar files carry
//! unqualified tags; the namespace is reintroduced when combining.
//!
//! Error policy: parse and identity errors abort the affected profile
//! file (logged, processing continues with the next profile); write
//! failures are logged per file and never stop the run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use xot::Xot;

use crate::classify::{classify, resolve_name, ElementKind};
use crate::defaults::PROFILE_FILE_SUFFIX;
use crate::error::{Error, Result};
use crate::writer;
use crate::xml;

/// Decompose every canonical profile document found in `dir`.
///
/// Only files directly under `dir` whose name ends with the profile
/// suffix participate; previously decomposed output in subdirectories is
/// left alone and fully rewritten file by file.
pub fn decompose_directory(dir: &Path) -> Result<()> {
    let mut profiles: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_profile = path.is_file()
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(PROFILE_FILE_SUFFIX));
        if is_profile {
            profiles.push(path);
        }
    }
    profiles.sort();

    for path in profiles {
        if let Err(err) = decompose_file(dir, &path) {
            log::error!("skipping {}: {}", path.display(), err);
        }
    }
    Ok(())
}

/// Decompose a single canonical profile document.
fn decompose_file(dir: &Path, path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    // Profile name is everything before the first dot of the file name.
    let profile_name = file_name.split('.').next().unwrap_or(file_name).to_string();

    let source = fs::read_to_string(path)?;
    let mut xot = Xot::new();
    let doc = xot.parse(&source).map_err(|err| Error::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let root = xot.document_element(doc)?;

    // Fresh root for the scalar meta file. Deliberately unqualified: the
    // combine direction re-declares the namespace on its own root, and an
    // inherited declaration here would collide with it.
    let scalar_root_name = xot.add_name("Profile");
    let scalar_root = xot.new_element(scalar_root_name);

    let profile_dir = dir.join(&profile_name);
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for element in xml::element_children(&xot, root) {
        let tag = xml::element_local_name(&xot, element)
            .unwrap_or_default()
            .to_string();
        match classify(&xot, element) {
            ElementKind::Collection => {
                let name =
                    resolve_name(&xot, element).ok_or_else(|| Error::IdentityResolution {
                        path: path.to_path_buf(),
                        tag: tag.clone(),
                    })?;
                if !seen.insert((tag.clone(), name.clone())) {
                    return Err(Error::DuplicateIdentity {
                        path: path.to_path_buf(),
                        tag,
                        name,
                    });
                }

                let subfolder = profile_dir.join(&tag);
                fs::create_dir_all(&subfolder)?;
                let fragment_path = subfolder.join(format!("{name}.{tag}-meta.xml"));
                let contents = writer::document_string(&xot, element, None);
                match writer::write_file(&fragment_path, &contents) {
                    Ok(()) => log::info!(
                        "saved <{}> element content to {}",
                        tag,
                        fragment_path.display()
                    ),
                    Err(err) => {
                        log::error!("failed to write {}: {}", fragment_path.display(), err)
                    }
                }
            }
            ElementKind::Scalar => {
                let text = xml::text_content(&xot, element);
                if text.trim().is_empty() {
                    continue;
                }
                let scalar_name = xot.add_name(&tag);
                let scalar = xot.new_element(scalar_name);
                let text_node = xot.new_text(&text);
                xot.append(scalar, text_node)?;
                xot.append(scalar_root, scalar)?;
            }
        }
    }

    fs::create_dir_all(&profile_dir)?;
    let scalar_path = profile_dir.join(format!("{profile_name}{PROFILE_FILE_SUFFIX}"));
    let contents = writer::document_string(&xot, scalar_root, None);
    match writer::write_file(&scalar_path, &contents) {
        Ok(()) => log::debug!("saved scalar settings to {}", scalar_path.display()),
        Err(err) => log::error!("failed to write {}: {}", scalar_path.display(), err),
    }
    Ok(())
}
