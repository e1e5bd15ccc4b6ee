//! Default values and format constants for Salesforce profile metadata.
//!
//! This module provides centralized constants used across commands,
//! ensuring consistency and avoiding duplication.

/// Default directory holding profile metadata in an sfdx project layout.
///
/// This can be overridden by the `--output` CLI flag on both commands.
pub const DEFAULT_PROFILE_DIR: &str = "force-app/main/default/profiles";

/// Namespace URI of the Salesforce metadata API.
pub const METADATA_NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";

/// File-name suffix of a canonical profile document and of the per-profile
/// scalar meta file. Fragment files deliberately do not use this suffix so
/// the combine scan can tell them apart.
pub const PROFILE_FILE_SUFFIX: &str = ".profile-meta.xml";

/// Metadata type name that marks profile entries in a package manifest.
pub const PROFILE_TYPE_NAME: &str = "Profile";

/// Candidate child tags used to name a collection element's fragment file,
/// in priority order. The resolver scans an element's children in document
/// order and takes the first child whose tag appears anywhere in this list.
///
/// Taken from the required fields of the Metadata API Profile type:
/// <https://developer.salesforce.com/docs/atlas.en-us.api_meta.meta/api_meta/meta_profile.htm>
pub const IDENTIFYING_TAGS: &[&str] = &[
    "application",
    "apexClass",
    "name",
    "externalDataSource",
    "flow",
    "object",
    "apexPage",
    "recordType",
    "tab",
    "field",
    "startAddress",
    "dataCategoryGroup",
    "layout",
    "weekdayStart",
    "friendlyname",
];
