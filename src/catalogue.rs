//! The top-level HyperCat document.

use crate::codec::Codec;
use crate::constants::HYPERCAT_MEDIA_TYPE;
use crate::error::{Error, Result};
use crate::item::Item;
use crate::metadata::Metadata;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered collection of items plus catalogue-level metadata.
///
/// Item hrefs are unique. `items` is private so the only way in is through
/// [`Catalogue::add_item`] and [`Catalogue::replace_item`], both of which
/// either apply fully or leave the catalogue untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalogue {
    items: Vec<Item>,
    pub description: String,
    pub content_type: Option<String>,
    pub metadata: Metadata,
}

impl Catalogue {
    /// Empty catalogue with the default HyperCat content type.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            description: description.into(),
            content_type: Some(HYPERCAT_MEDIA_TYPE.to_string()),
            metadata: Metadata::new(),
        }
    }

    /// Build a catalogue from already-validated parts, rejecting duplicate hrefs.
    pub(crate) fn from_parts(
        description: String,
        content_type: Option<String>,
        metadata: Metadata,
        items: Vec<Item>,
    ) -> Result<Self> {
        let mut catalogue = Self {
            items: Vec::with_capacity(items.len()),
            description,
            content_type,
            metadata,
        };
        for item in items {
            catalogue.add_item(item)?;
        }
        Ok(catalogue)
    }

    /// Append a catalogue-level relation. Repeated keys are permitted, e.g.
    /// several `containsContentType` relations.
    pub fn add_rel(&mut self, rel: impl Into<String>, val: impl Into<String>) {
        self.metadata.append(rel, val);
    }

    pub fn replace_rel(&mut self, rel: &str, val: &str) {
        self.metadata.replace(rel, val);
    }

    pub fn add_item(&mut self, item: Item) -> Result<()> {
        if self.position(&item.href).is_some() {
            return Err(Error::DuplicateHref { href: item.href });
        }
        self.items.push(item);
        Ok(())
    }

    /// Overwrite the item sharing `item.href`, keeping its position.
    ///
    /// Not an upsert: an unknown href is an error.
    pub fn replace_item(&mut self, item: Item) -> Result<()> {
        match self.position(&item.href) {
            Some(index) => {
                self.items[index] = item;
                Ok(())
            }
            None => Err(Error::HrefNotFound { href: item.href }),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, href: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.href == href)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rels(&self) -> Vec<&str> {
        self.metadata.rels()
    }

    pub fn vals(&self, rel: &str) -> Vec<&str> {
        self.metadata.vals(rel)
    }

    fn position(&self, href: &str) -> Option<usize> {
        self.items.iter().position(|item| item.href == href)
    }
}

impl Serialize for Catalogue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Codec::default().catalogue_view(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Catalogue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Codec::default()
            .decode_catalogue(value)
            .map_err(serde::de::Error::custom)
    }
}
