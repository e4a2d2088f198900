// src/view/targets.rs
//
// The four render targets a CatalogView writes into, and the fragments it
// hands them. Hosts (HTML, egui, test fakes) implement these.

use crate::catalog::FastenerRecord;
use crate::config::consts::PREVIEW_CAPTION;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl From<&FastenerRecord> for SelectOption {
    fn from(r: &FastenerRecord) -> Self {
        Self { value: r.id.clone(), label: r.name.clone() }
    }
}

/// Description plus the two tag lists, in record order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailsFragment {
    pub description: String,
    pub applications: Vec<String>,
    pub materials: Vec<String>,
}

impl From<&FastenerRecord> for DetailsFragment {
    fn from(r: &FastenerRecord) -> Self {
        Self {
            description: r.description.clone(),
            applications: r.applications.clone(),
            materials: r.materials.clone(),
        }
    }
}

/// Spec rows in insertion order, the verbatim script, and the fixed caption.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaFragment {
    pub spec_rows: Vec<(String, String)>,
    pub script: String,
    pub caption: &'static str,
}

impl From<&FastenerRecord> for MetaFragment {
    fn from(r: &FastenerRecord) -> Self {
        Self {
            spec_rows: r.specs.to_rows(),
            script: r.script.clone(),
            caption: PREVIEW_CAPTION,
        }
    }
}

/// A selector control. It owns the selected value; the view only reads it.
pub trait SelectTarget {
    fn set_options(&mut self, options: Vec<SelectOption>);

    /// Current value, `None` when nothing is selected.
    fn value(&self) -> Option<&str>;

    fn set_value(&mut self, value: &str);
}

/// A container whose whole content is replaced on every render.
pub trait Region<T> {
    fn replace(&mut self, content: T);
}

pub trait ImageTarget {
    fn set_image(&mut self, src: &str, alt: &str);
}
