//! Catalogue entries.

use crate::codec::Codec;
use crate::constants::{CONTENT_TYPE_REL, HYPERCAT_MEDIA_TYPE};
use crate::metadata::Metadata;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One resource listed in a catalogue, identified by `href`.
///
/// `description` and `content_type` are first-class fields; `metadata` only
/// holds the remaining relations. Items are plain values: a catalogue stores
/// its own copy, so later edits to the caller's item never reach it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Item {
    pub href: String,
    pub description: String,
    pub content_type: Option<String>,
    pub metadata: Metadata,
}

impl Item {
    pub fn new(href: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            description: description.into(),
            content_type: None,
            metadata: Metadata::new(),
        }
    }

    /// Set the first-class content type. An empty string clears it, since
    /// the encoder never writes an empty content-type relation.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into()).filter(|ct| !ct.is_empty());
        self
    }

    /// Append to the extra metadata.
    ///
    /// The relation is stored as given, even for the description or
    /// content-type relation; use the fields or [`Item::with_content_type`]
    /// for those. A content-type relation added here still counts for
    /// [`Item::is_catalogue`], but after an encode/decode round trip it comes
    /// back in `content_type` rather than `metadata`.
    pub fn add_rel(&mut self, rel: impl Into<String>, val: impl Into<String>) {
        self.metadata.append(rel, val);
    }

    pub fn replace_rel(&mut self, rel: &str, val: &str) {
        self.metadata.replace(rel, val);
    }

    /// True when this item references another HyperCat catalogue.
    ///
    /// Matches on the content-type relation only; the media type appearing
    /// under any other key does not count.
    pub fn is_catalogue(&self) -> bool {
        self.content_type.as_deref() == Some(HYPERCAT_MEDIA_TYPE)
            || self.metadata.contains(CONTENT_TYPE_REL, HYPERCAT_MEDIA_TYPE)
    }

    pub fn rels(&self) -> Vec<&str> {
        self.metadata.rels()
    }

    pub fn vals(&self, rel: &str) -> Vec<&str> {
        self.metadata.vals(rel)
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Codec::default().item_view(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Codec::default()
            .decode_item(value)
            .map_err(serde::de::Error::custom)
    }
}
