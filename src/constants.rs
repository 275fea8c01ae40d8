//! Well-known relation URIs and values defined by the HyperCat standard.
//!
//! Only [`DESCRIPTION_REL`] and [`CONTENT_TYPE_REL`] are treated specially by
//! the codec. Everything else here is an opaque value that applications may
//! look up with `vals()`.

/// Format version written by the canonical codec.
pub const HYPERCAT_VERSION: &str = "3.0";

/// Media type of HyperCat catalogue documents.
pub const HYPERCAT_MEDIA_TYPE: &str = "application/vnd.hypercat.catalogue+json";

/// `hasDescription` relation.
pub const DESCRIPTION_REL: &str = "urn:X-hypercat:rels:hasDescription:en";

/// `isContentType` relation.
pub const CONTENT_TYPE_REL: &str = "urn:X-hypercat:rels:isContentType";

pub const HOMEPAGE_REL: &str = "urn:X-hypercat:rels:hasHomepage";

pub const CONTAINS_CONTENT_TYPE_REL: &str = "urn:X-hypercat:rels:containsContentType";

pub const SUPPORTS_SEARCH_REL: &str = "urn:X-hypercat:rels:supportsSearch";

// Values for SUPPORTS_SEARCH_REL.
pub const SIMPLE_SEARCH_VAL: &str = "urn:X-hypercat:search:simple";
pub const GEO_BOUND_SEARCH_VAL: &str = "urn:X-hypercat:search:geobound";
pub const LEXICOGRAPHIC_SEARCH_VAL: &str = "urn:X-hypercat:search:lexrange";
pub const MULTI_SEARCH_VAL: &str = "urn:X-hypercat:search:multi";
pub const SUBSTRING_SEARCH_VAL: &str = "urn:X-hypercat:search:substring";
