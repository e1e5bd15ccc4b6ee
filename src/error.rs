//! # Error Handling
//!
//! Centralized error type for profile decomposition and recomposition,
//! built with `thiserror`. Every variant that originates from a specific
//! input file carries the file path so failures can be reported per file
//! rather than as an anonymous abort.
//!
//! Structural problems in the input (a collection element with no
//! identifying child, two collection elements resolving to the same
//! fragment name) get their own variants: callers abort the affected
//! profile with a clear message and move on to the next one.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for sfprofiles operations
#[derive(Error, Debug)]
pub enum Error {
    /// A collection element contains no child whose tag is in the
    /// identifying-tag list, so no fragment file name can be derived.
    #[error("no identifying tag found for <{tag}> in {}", path.display())]
    IdentityResolution { path: PathBuf, tag: String },

    /// Two collection elements of the same tag resolved to the same
    /// fragment name; writing both would silently lose one.
    #[error("duplicate identity <{tag}> \"{name}\" in {}", path.display())]
    DuplicateIdentity {
        path: PathBuf,
        tag: String,
        name: String,
    },

    /// The named file could not be parsed as XML.
    #[error("XML parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// An XML tree operation failed, wrapped from `xot::Error`.
    #[error("XML tree error: {0}")]
    Xml(#[from] xot::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
