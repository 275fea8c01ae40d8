use crate::constants::{CONTENT_TYPE_REL, DESCRIPTION_REL};
use thiserror::Error;

/// Validation and decode failures.
///
/// None of these are transient; retrying the same input yields the same error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("an item with href \"{href}\" already exists within the catalogue")]
    DuplicateHref { href: String },

    #[error("an item with href \"{href}\" does not exist within the catalogue")]
    HrefNotFound { href: String },

    #[error("\"{rel}\" is a mandatory metadata relation", rel = DESCRIPTION_REL)]
    MissingDescription,

    #[error("\"{rel}\" is a mandatory metadata relation", rel = CONTENT_TYPE_REL)]
    MissingContentType,

    #[error("\"href\" is a mandatory attribute")]
    MissingHref,

    #[error("unknown format revision '{value}', expected one of 1.1, 2.0, 3.0")]
    UnknownRevision { value: String },

    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
