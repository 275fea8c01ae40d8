//! JSON encode/decode for items and catalogues.
//!
//! On the wire, `description` and `content_type` are ordinary relations in the
//! metadata list. Decoding lifts them out into first-class fields and
//! enforces the mandatory ones; encoding appends them after the extra
//! metadata. Field names and the content-type requirement come from the
//! [`WireFormat`] the codec was built with.
//!
//! Objects are written with explicit map serialization so key order on the
//! wire is `href`/`items` first, metadata second, regardless of how
//! `serde_json` orders its own maps.

use crate::catalogue::Catalogue;
use crate::error::{Error, Result};
use crate::item::Item;
use crate::metadata::Metadata;
use crate::relation::Relation;
use crate::revision::{Revision, WireFormat};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::io::{Read, Write};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    format: WireFormat,
}

impl Codec {
    pub fn new(format: WireFormat) -> Self {
        Self { format }
    }

    pub fn for_revision(revision: Revision) -> Self {
        Self::new(revision.wire_format())
    }

    pub fn format(&self) -> &WireFormat {
        &self.format
    }

    /// Serializable view of `item` in this codec's wire format.
    pub fn item_view<'a>(&'a self, item: &'a Item) -> ItemView<'a> {
        ItemView {
            item,
            format: &self.format,
        }
    }

    /// Serializable view of `catalogue` in this codec's wire format.
    pub fn catalogue_view<'a>(&'a self, catalogue: &'a Catalogue) -> CatalogueView<'a> {
        CatalogueView {
            catalogue,
            format: &self.format,
        }
    }

    /// Encode `item` as a JSON value, the counterpart of [`Codec::decode_item`].
    ///
    /// `serde_json` maps do not keep insertion order, so use
    /// [`Codec::item_to_vec`] when key order on the wire matters. Relation
    /// order inside the metadata array is always kept.
    pub fn encode_item(&self, item: &Item) -> Result<Value> {
        Ok(serde_json::to_value(self.item_view(item))?)
    }

    /// Encode `catalogue` as a JSON value, the counterpart of
    /// [`Codec::decode_catalogue`].
    pub fn encode_catalogue(&self, catalogue: &Catalogue) -> Result<Value> {
        Ok(serde_json::to_value(self.catalogue_view(catalogue))?)
    }

    pub fn item_to_vec(&self, item: &Item) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.item_view(item))?)
    }

    pub fn to_vec(&self, catalogue: &Catalogue) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.catalogue_view(catalogue))?)
    }

    pub fn to_vec_pretty(&self, catalogue: &Catalogue) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.catalogue_view(catalogue))?)
    }

    pub fn to_string(&self, catalogue: &Catalogue) -> Result<String> {
        Ok(serde_json::to_string(&self.catalogue_view(catalogue))?)
    }

    pub fn to_writer<W: Write>(&self, writer: W, catalogue: &Catalogue) -> Result<()> {
        serde_json::to_writer(writer, &self.catalogue_view(catalogue))?;
        Ok(())
    }

    pub fn decode_item_slice(&self, bytes: &[u8]) -> Result<Item> {
        self.decode_item(serde_json::from_slice(bytes)?)
    }

    pub fn from_slice(&self, bytes: &[u8]) -> Result<Catalogue> {
        self.decode_catalogue(serde_json::from_slice(bytes)?)
    }

    pub fn from_str(&self, input: &str) -> Result<Catalogue> {
        self.decode_catalogue(serde_json::from_str(input)?)
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<Catalogue> {
        self.decode_catalogue(serde_json::from_reader(reader)?)
    }

    /// Decode `bytes` with this codec and re-encode them with `target`.
    pub fn transcode(&self, bytes: &[u8], target: &Codec) -> Result<Vec<u8>> {
        let catalogue = self.from_slice(bytes)?;
        debug!(
            from = %self.format.revision,
            to = %target.format.revision,
            items = catalogue.len(),
            "transcoding catalogue"
        );
        target.to_vec(&catalogue)
    }

    pub fn decode_item(&self, value: Value) -> Result<Item> {
        let mut object: Map<String, Value> = serde_json::from_value(value)?;
        let href: String = take_field(&mut object, "href")?.unwrap_or_default();
        let relations: Vec<Relation> =
            take_field(&mut object, &self.format.item_metadata_field)?.unwrap_or_default();
        let split = self.split(relations);

        if href.is_empty() {
            return Err(Error::MissingHref);
        }
        if split.description.is_empty() {
            return Err(Error::MissingDescription);
        }

        Ok(Item {
            href,
            description: split.description,
            content_type: split.content_type,
            metadata: split.extra,
        })
    }

    pub fn decode_catalogue(&self, value: Value) -> Result<Catalogue> {
        let mut object: Map<String, Value> = serde_json::from_value(value)?;
        let raw_items: Vec<Value> = take_field(&mut object, "items")?.unwrap_or_default();
        let relations: Vec<Relation> =
            take_field(&mut object, &self.format.catalogue_metadata_field)?.unwrap_or_default();

        let items = raw_items
            .into_iter()
            .map(|raw| self.decode_item(raw))
            .collect::<Result<Vec<_>>>()?;

        let relation_count = relations.len();
        let split = self.split(relations);
        if split.description.is_empty() {
            return Err(Error::MissingDescription);
        }
        if self.format.require_content_type && split.content_type.is_none() {
            return Err(Error::MissingContentType);
        }

        debug!(
            revision = %self.format.revision,
            items = items.len(),
            relations = relation_count,
            "decoded catalogue"
        );
        Catalogue::from_parts(split.description, split.content_type, split.extra, items)
    }

    // Last occurrence of either mandatory relation wins; an empty content type
    // counts as absent.
    fn split(&self, relations: Vec<Relation>) -> SplitMetadata {
        let mut split = SplitMetadata::default();
        for relation in relations {
            if relation.rel == self.format.description_rel {
                split.description = relation.val;
            } else if relation.rel == self.format.content_type_rel {
                split.content_type = Some(relation.val).filter(|val| !val.is_empty());
            } else {
                split.extra.push(relation);
            }
        }
        split
    }
}

/// Parse a catalogue in the canonical format from `reader`.
pub fn parse<R: Read>(reader: R) -> Result<Catalogue> {
    Codec::default().from_reader(reader)
}

pub fn parse_str(input: &str) -> Result<Catalogue> {
    Codec::default().from_str(input)
}

#[derive(Default)]
struct SplitMetadata {
    description: String,
    content_type: Option<String>,
    extra: Metadata,
}

// Missing and `null` both read as absent.
fn take_field<T: serde::de::DeserializeOwned>(
    object: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<T>> {
    match object.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}

#[derive(Serialize)]
struct RelationRef<'a> {
    rel: &'a str,
    val: &'a str,
}

fn wire_relations<'a>(
    format: &'a WireFormat,
    extra: &'a Metadata,
    description: &'a str,
    content_type: Option<&'a str>,
) -> Vec<RelationRef<'a>> {
    let mut relations: Vec<RelationRef<'a>> = extra
        .iter()
        .map(|r| RelationRef {
            rel: &r.rel,
            val: &r.val,
        })
        .collect();
    if !description.is_empty() {
        relations.push(RelationRef {
            rel: &format.description_rel,
            val: description,
        });
    }
    if let Some(content_type) = content_type.filter(|ct| !ct.is_empty()) {
        relations.push(RelationRef {
            rel: &format.content_type_rel,
            val: content_type,
        });
    }
    relations
}

pub struct ItemView<'a> {
    item: &'a Item,
    format: &'a WireFormat,
}

impl Serialize for ItemView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let relations = wire_relations(
            self.format,
            &self.item.metadata,
            &self.item.description,
            self.item.content_type.as_deref(),
        );
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("href", &self.item.href)?;
        map.serialize_entry(self.format.item_metadata_field.as_str(), &relations)?;
        map.end()
    }
}

pub struct CatalogueView<'a> {
    catalogue: &'a Catalogue,
    format: &'a WireFormat,
}

impl Serialize for CatalogueView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let items: Vec<ItemView<'_>> = self
            .catalogue
            .items()
            .iter()
            .map(|item| ItemView {
                item,
                format: self.format,
            })
            .collect();
        let relations = wire_relations(
            self.format,
            &self.catalogue.metadata,
            &self.catalogue.description,
            self.catalogue.content_type.as_deref(),
        );
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("items", &items)?;
        map.serialize_entry(self.format.catalogue_metadata_field.as_str(), &relations)?;
        map.end()
    }
}
