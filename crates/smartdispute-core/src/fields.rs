//! Resolved form fields handed to the template renderer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Form-specific field name → resolved value.
///
/// Produced fresh by each autofill call and consumed immediately by
/// rendering; it has no identity of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_as_flat_object() {
        let fields: FieldMap = [("full_name", "Ada"), ("date", "")].into_iter().collect();
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"date":"","full_name":"Ada"}"#);
    }

    #[test]
    fn insert_overwrites() {
        let mut fields = FieldMap::new();
        fields.insert("opponent", "Acme");
        fields.insert("opponent", "Acme Holdings");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("opponent"), Some("Acme Holdings"));
    }
}
