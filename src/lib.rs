//! # sfprofiles Library
//!
//! Core functionality for splitting Salesforce permission-profile
//! metadata into version-control-friendly fragments and combining those
//! fragments back into canonical documents. It is driven by the
//! `sfprofiles` command-line tool but usable directly by anything that
//! needs the transformation.
//!
//! ## Quick Example
//!
//! ```
//! use xot::Xot;
//! use sfprofiles::classify::{classify, resolve_name, ElementKind};
//!
//! let mut xot = Xot::new();
//! let doc = xot
//!     .parse("<objectPermissions><allowRead>true</allowRead><object>Account</object></objectPermissions>")
//!     .unwrap();
//! let root = xot.document_element(doc).unwrap();
//!
//! // A block with element children is a collection...
//! assert_eq!(classify(&xot, root), ElementKind::Collection);
//! // ...named after the first identifying child in document order.
//! assert_eq!(resolve_name(&xot, root).as_deref(), Some("Account"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Classification (`classify`)**: a top-level profile element is
//!   either a scalar setting (childless, one text value) or a collection
//!   block (has element children). This one decision drives both
//!   transformation directions.
//! - **Identity (`classify::resolve_name`)**: a collection element's
//!   fragment file is named after the text of its first child whose tag
//!   is in the identifying-tag priority list.
//! - **Decomposition (`decompose`)**: canonical document → one fragment
//!   file per collection element plus one scalar meta file per profile.
//! - **Recomposition (`compose`)**: fragment files → canonical document,
//!   reconciled against the persisted scalar meta file (fresh content
//!   wins, existing content fills gaps).
//! - **Canonical writing (`writer`)**: both directions serialize through
//!   one deterministic writer, so a given logical document always
//!   produces identical bytes.
//! - **Manifest filtering (`manifest`)**: a package manifest can limit
//!   which profiles participate in recomposition.

pub mod classify;
pub mod compose;
pub mod decompose;
pub mod defaults;
pub mod error;
pub mod manifest;
pub mod writer;
pub mod xml;
