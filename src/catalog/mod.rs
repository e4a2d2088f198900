// src/catalog/mod.rs
//! The fastener catalog: an ordered, validated, read-only list of records.
//!
//! A [`Catalog`] is checked once when it is built (non-empty, unique ids) and
//! never changes afterwards. The builtin gallery lives behind
//! [`Catalog::builtin`]; a replacement can be loaded from a JSON array of
//! records with [`Catalog::from_json_path`].

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{Error, Result};

mod record;
mod seed;

pub use record::{FastenerRecord, SpecTable};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<FastenerRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<FastenerRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !is_safe_id(&r.id) {
                return Err(Error::InvalidId(r.id.clone()));
            }
            if !seen.insert(r.id.as_str()) {
                return Err(Error::DuplicateId(r.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The gallery that ships with the app. Built on first use.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog { records: seed::records() })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let records: Vec<FastenerRecord> = serde_json::from_str(text)?;
        Self::from_records(records)
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::CatalogFile {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text)?;
        logf!("Catalog: loaded {} record(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn records(&self) -> &[FastenerRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FastenerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> &FastenerRecord {
        // Non-empty by construction.
        &self.records[0]
    }

    pub fn find(&self, id: &str) -> Option<&FastenerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }
}

/// Ids become `<id>.html` file names, so they must stay a single path segment.
fn is_safe_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && !id.contains("..")
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FastenerRecord;
    type IntoIter = std::slice::Iter<'a, FastenerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
