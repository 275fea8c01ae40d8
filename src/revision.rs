//! Format revisions and the wire configuration the codec is closed over.
//!
//! HyperCat revisions disagree on the metadata field names and on whether a
//! catalogue must declare its content type. Rather than hard-coding one
//! revision, the codec reads everything revision-specific from a
//! [`WireFormat`], so the same build can read 1.1 documents and write 3.0 ones.

use crate::constants::{CONTENT_TYPE_REL, DESCRIPTION_REL};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Revision {
    V1_1,
    V2_0,
    #[default]
    V3_0,
}

impl Revision {
    pub const ALL: [Revision; 3] = [Revision::V1_1, Revision::V2_0, Revision::V3_0];

    pub fn as_str(&self) -> &'static str {
        match self {
            Revision::V1_1 => "1.1",
            Revision::V2_0 => "2.0",
            Revision::V3_0 => "3.0",
        }
    }

    pub fn catalogue_metadata_field(&self) -> &'static str {
        match self {
            Revision::V1_1 | Revision::V2_0 => "item-metadata",
            Revision::V3_0 => "catalogue-metadata",
        }
    }

    pub fn item_metadata_field(&self) -> &'static str {
        match self {
            Revision::V1_1 | Revision::V2_0 => "i-object-metadata",
            Revision::V3_0 => "item-metadata",
        }
    }

    /// Whether catalogues must carry a content-type relation.
    pub fn requires_content_type(&self) -> bool {
        !matches!(self, Revision::V1_1)
    }

    pub fn wire_format(&self) -> WireFormat {
        WireFormat::from(*self)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Revision {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        match trimmed.strip_prefix('v').unwrap_or(trimmed) {
            "1.1" => Ok(Revision::V1_1),
            "2.0" => Ok(Revision::V2_0),
            "3.0" => Ok(Revision::V3_0),
            _ => Err(Error::UnknownRevision {
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for Revision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Revision::try_from(s)
    }
}

/// Everything revision-specific the codec needs.
///
/// Built from a [`Revision`]; individual fields can be overridden for
/// documents that follow a revision loosely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireFormat {
    pub revision: Revision,
    pub catalogue_metadata_field: String,
    pub item_metadata_field: String,
    pub description_rel: String,
    pub content_type_rel: String,
    pub require_content_type: bool,
}

impl WireFormat {
    pub fn with_catalogue_metadata_field(mut self, field: impl Into<String>) -> Self {
        self.catalogue_metadata_field = field.into();
        self
    }

    pub fn with_item_metadata_field(mut self, field: impl Into<String>) -> Self {
        self.item_metadata_field = field.into();
        self
    }

    pub fn with_require_content_type(mut self, required: bool) -> Self {
        self.require_content_type = required;
        self
    }
}

impl From<Revision> for WireFormat {
    fn from(revision: Revision) -> Self {
        Self {
            revision,
            catalogue_metadata_field: revision.catalogue_metadata_field().to_string(),
            item_metadata_field: revision.item_metadata_field().to_string(),
            description_rel: DESCRIPTION_REL.to_string(),
            content_type_rel: CONTENT_TYPE_REL.to_string(),
            require_content_type: revision.requires_content_type(),
        }
    }
}

impl Default for WireFormat {
    fn default() -> Self {
        Revision::default().wire_format()
    }
}
