use serde::{Deserialize, Serialize};

/// A single `(rel, val)` metadata pair.
///
/// `rel` is conventionally a URI. Relations are replaced wholesale rather than
/// edited in place. A missing key on the wire reads as an empty string; a
/// non-string value is still rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub val: String,
}

impl Relation {
    pub fn new(rel: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            val: val.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_rel_and_val_keys() {
        let rel = Relation::new("relation", "value");
        let json = serde_json::to_string(&rel).unwrap();
        assert_eq!(json, r#"{"rel":"relation","val":"value"}"#);
    }

    #[test]
    fn deserializes_rel_and_val_keys() {
        let rel: Relation = serde_json::from_str(r#"{"rel":"relation","val":"value"}"#).unwrap();
        assert_eq!(rel.rel, "relation");
        assert_eq!(rel.val, "value");
    }

    #[test]
    fn missing_keys_read_as_empty() {
        let rel: Relation = serde_json::from_str(r#"{"rel":"relation"}"#).unwrap();
        assert_eq!(rel, Relation::new("relation", ""));

        let rel: Relation = serde_json::from_str(r#"{"val":"value"}"#).unwrap();
        assert_eq!(rel, Relation::new("", "value"));
    }

    #[test]
    fn rejects_non_string_val() {
        assert!(serde_json::from_str::<Relation>(r#"{"rel":"relation","val":3}"#).is_err());
    }
}
