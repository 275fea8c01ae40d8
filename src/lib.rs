//! Build, validate, and (de)serialize HyperCat catalogues.
//!
//! A catalogue is a flat list of [`Item`]s plus catalogue-level metadata.
//! Each item and the catalogue itself carry a description and an optional
//! content type as first-class fields, with any further relations kept in an
//! ordered [`Metadata`] list.
//!
//! ```ignore
//! use hypercat::{Catalogue, Codec, Item, SUPPORTS_SEARCH_REL, SIMPLE_SEARCH_VAL};
//!
//! let mut cat = Catalogue::new("Sensors");
//! cat.add_rel(SUPPORTS_SEARCH_REL, SIMPLE_SEARCH_VAL);
//! cat.add_item(Item::new("/sensor1", "Sensor 1"))?;
//!
//! let bytes = Codec::default().to_vec(&cat)?;
//! let decoded = hypercat::parse(bytes.as_slice())?;
//! ```
//!
//! [`Codec`] is parameterized by a [`WireFormat`], so documents from older
//! revisions can be read and rewritten in the current one.

pub mod catalogue;
pub mod codec;
pub mod constants;
pub mod error;
pub mod item;
pub mod metadata;
pub mod relation;
pub mod revision;

pub use catalogue::Catalogue;
pub use codec::{CatalogueView, Codec, ItemView, parse, parse_str};
pub use constants::*;
pub use error::{Error, Result};
pub use item::Item;
pub use metadata::Metadata;
pub use relation::Relation;
pub use revision::{Revision, WireFormat};
