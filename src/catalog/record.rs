// src/catalog/record.rs
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One fastener type's static descriptive data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastenerRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub applications: Vec<String>,
    pub materials: Vec<String>,
    pub specs: SpecTable,
    /// Relative path or URI; never checked for existence.
    pub image: String,
    /// Export command shown verbatim. Never parsed or run.
    pub script: String,
}

impl FastenerRecord {
    /// Alternative text for the preview image.
    pub fn image_alt(&self) -> String {
        join!(&self.name, " preview")
    }
}

/// Label → value pairs kept in insertion order.
///
/// Serializes as a JSON object; deserializing keeps document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecTable(Vec<(String, String)>);

impl SpecTable {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry. A repeated label replaces the earlier value in place.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some((_, v)) => *v = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_rows(&self) -> Vec<(String, String)> {
        self.0.clone()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for SpecTable {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut table = SpecTable::new();
        for (l, v) in iter {
            table.insert(l, v);
        }
        table
    }
}

impl Serialize for SpecTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (l, v) in &self.0 {
            map.serialize_entry(l, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpecTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecTableVisitor;

        impl<'de> Visitor<'de> for SpecTableVisitor {
            type Value = SpecTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of spec labels to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SpecTable, A::Error> {
                let mut table = SpecTable::new();
                while let Some((l, v)) = access.next_entry::<String, String>()? {
                    table.insert(l, v);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(SpecTableVisitor)
    }
}
