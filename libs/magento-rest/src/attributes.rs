//! Magento's dynamic custom-attribute bag.
//!
//! Magento entities carry a `custom_attributes` array of
//! `{"attribute_code": ..., "value": ...}` objects. Attribute codes compare
//! ASCII-case-insensitively (Magento treats `Size` and `size` as the same
//! code) while the original casing is preserved in storage and on the wire.

use std::hash::{Hash, Hasher};

use indexmap::{Equivalent, IndexMap};
use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// One reconstructed `(code, value)` attribute record, in Magento's JSON
/// shape.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomAttribute {
    pub attribute_code: String,
    pub value: String,
}

/// Attribute code preserving its original casing but comparing and hashing
/// ASCII-case-insensitively.
#[derive(Clone, Debug)]
struct AttributeCode(String);

impl PartialEq for AttributeCode {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for AttributeCode {}

impl Hash for AttributeCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

/// Borrowed lookup key; hashes exactly like [`AttributeCode`].
struct CodeRef<'a>(&'a str);

impl Hash for CodeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl Equivalent<AttributeCode> for CodeRef<'_> {
    fn equivalent(&self, key: &AttributeCode) -> bool {
        self.0.eq_ignore_ascii_case(&key.0)
    }
}

/// Insertion-ordered, case-insensitively keyed collection of custom
/// attributes.
///
/// Equality between two collections is **order-sensitive**: the key
/// sequences and value sequences must match pairwise (case-insensitively)
/// in iteration order, so the same pairs inserted in a different order do
/// not compare equal. That matches the system this bag talks to; use
/// [`unordered_eq`](Self::unordered_eq) for the conventional set-like
/// comparison.
#[derive(Clone, Debug, Default)]
pub struct MagentoCustomAttributeCollection {
    entries: IndexMap<AttributeCode, String>,
}

impl MagentoCustomAttributeCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by attribute code, case-insensitively.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(&CodeRef(code)).map(String::as_str)
    }

    /// Whether an attribute with this code exists, compared
    /// case-insensitively.
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.contains_key(&CodeRef(code))
    }

    /// Insert or replace an attribute value. Replacing keeps the originally
    /// stored code casing and the original insertion position; the previous
    /// value is returned.
    pub fn insert(&mut self, code: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(AttributeCode(code.into()), value.into())
    }

    /// Remove an attribute by code, preserving the order of the remaining
    /// entries. Returns the removed value.
    pub fn remove(&mut self, code: &str) -> Option<String> {
        self.entries.shift_remove(&CodeRef(code))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate raw `(code, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(code, value)| (code.0.as_str(), value.as_str()))
    }

    /// Iterate reconstructed [`CustomAttribute`] records in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = CustomAttribute> + '_ {
        self.entries.iter().map(|(code, value)| CustomAttribute {
            attribute_code: code.0.clone(),
            value: value.clone(),
        })
    }

    /// Conventional order-insensitive comparison: same codes mapped to the
    /// same values, regardless of insertion order.
    #[must_use]
    pub fn unordered_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(code, value)| {
                other
                    .get(code)
                    .is_some_and(|theirs| theirs.eq_ignore_ascii_case(value))
            })
    }
}

impl PartialEq for MagentoCustomAttributeCollection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((code_a, value_a), (code_b, value_b))| {
                    code_a.eq_ignore_ascii_case(code_b) && value_a.eq_ignore_ascii_case(value_b)
                })
    }
}

impl Eq for MagentoCustomAttributeCollection {}

impl<C: Into<String>, V: Into<String>> FromIterator<(C, V)> for MagentoCustomAttributeCollection {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (code, value) in iter {
            collection.insert(code, value);
        }
        collection
    }
}

impl<C: Into<String>, V: Into<String>> Extend<(C, V)> for MagentoCustomAttributeCollection {
    fn extend<I: IntoIterator<Item = (C, V)>>(&mut self, iter: I) {
        for (code, value) in iter {
            self.insert(code, value);
        }
    }
}

impl Serialize for MagentoCustomAttributeCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for attribute in self.attributes() {
            seq.serialize_element(&attribute)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for MagentoCustomAttributeCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<CustomAttribute>::deserialize(deserializer)?;
        Ok(records
            .into_iter()
            .map(|a| (a.attribute_code, a.value))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_compare_case_insensitively() {
        let mut attrs = MagentoCustomAttributeCollection::new();
        attrs.insert("Size", "42");
        assert!(attrs.contains_code("SIZE"));
        assert!(attrs.contains_code("size"));
        assert_eq!(attrs.get("sIzE"), Some("42"));
    }

    #[test]
    fn original_casing_is_preserved() {
        let mut attrs = MagentoCustomAttributeCollection::new();
        attrs.insert("Size", "42");
        // Replacing through a differently-cased code keeps the stored casing.
        attrs.insert("SIZE", "44");
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("Size", "44")]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let forward: MagentoCustomAttributeCollection =
            [("A", "1"), ("B", "2")].into_iter().collect();
        let backward: MagentoCustomAttributeCollection =
            [("B", "2"), ("A", "1")].into_iter().collect();

        assert_ne!(forward, backward);
        assert!(forward.unordered_eq(&backward));
    }

    #[test]
    fn equality_ignores_case_of_codes_and_values() {
        let a: MagentoCustomAttributeCollection =
            [("color", "Red"), ("size", "M")].into_iter().collect();
        let b: MagentoCustomAttributeCollection =
            [("Color", "red"), ("SIZE", "m")].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let mut attrs: MagentoCustomAttributeCollection =
            [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(attrs.remove("B"), Some("2".to_owned()));
        let codes: Vec<_> = attrs.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["a", "c"]);
    }

    #[test]
    fn serde_round_trips_magento_json_shape() {
        let attrs: MagentoCustomAttributeCollection =
            [("color", "red"), ("Size", "42")].into_iter().collect();

        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"attribute_code": "color", "value": "red"},
                {"attribute_code": "Size", "value": "42"},
            ])
        );

        let back: MagentoCustomAttributeCollection = serde_json::from_value(json).unwrap();
        assert_eq!(back, attrs);
    }

    #[test]
    fn attributes_reconstructs_records() {
        let attrs: MagentoCustomAttributeCollection = [("color", "red")].into_iter().collect();
        let records: Vec<_> = attrs.attributes().collect();
        assert_eq!(
            records,
            vec![CustomAttribute {
                attribute_code: "color".to_owned(),
                value: "red".to_owned(),
            }]
        );
    }
}
