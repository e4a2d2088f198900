// src/view/mod.rs
//! The catalog view: selection → lookup → details + preview render.
//!
//! ```text
//! initialize() ─┐
//! host change ──┴→ on_selection_changed() → find(id) ─┬→ render_details → details region
//!                                                     └→ render_preview → image + meta region
//! ```
//!
//! The view borrows a validated [`Catalog`] and owns four injected render
//! targets. It keeps no selection state of its own: the selector is the only
//! place the current id lives.

use crate::catalog::{Catalog, FastenerRecord};

mod targets;

pub use targets::{DetailsFragment, ImageTarget, MetaFragment, Region, SelectOption, SelectTarget};

pub struct CatalogView<'c, S, D, I, M> {
    catalog: &'c Catalog,
    select: S,
    details: D,
    image: I,
    meta: M,
}

impl<'c, S, D, I, M> CatalogView<'c, S, D, I, M>
where
    S: SelectTarget,
    D: Region<DetailsFragment>,
    I: ImageTarget,
    M: Region<MetaFragment>,
{
    pub fn new(catalog: &'c Catalog, select: S, details: D, image: I, meta: M) -> Self {
        Self { catalog, select, details, image, meta }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Fill the selector, select the first record and render it.
    pub fn initialize(&mut self) -> Option<&'c FastenerRecord> {
        let options = self.catalog.iter().map(SelectOption::from).collect();
        self.select.set_options(options);
        self.select.set_value(&self.catalog.first().id);
        logf!("View: initialized with {} option(s)", self.catalog.len());
        self.on_selection_changed()
    }

    /// Re-render for the selector's current value.
    ///
    /// A value with no matching record leaves every target untouched.
    pub fn on_selection_changed(&mut self) -> Option<&'c FastenerRecord> {
        let catalog = self.catalog;
        let record = catalog.find(self.select.value()?)?;
        logd!("View: rendering {}", record.id);
        self.render_details(record);
        self.render_preview(record);
        Some(record)
    }

    /// Set the selector as a user would, then handle the change.
    pub fn select(&mut self, id: &str) -> Option<&'c FastenerRecord> {
        self.select.set_value(id);
        self.on_selection_changed()
    }

    pub fn render_details(&mut self, record: &FastenerRecord) {
        self.details.replace(DetailsFragment::from(record));
    }

    pub fn render_preview(&mut self, record: &FastenerRecord) {
        self.image.set_image(&record.image, &record.image_alt());
        self.meta.replace(MetaFragment::from(record));
    }

    /// Record for the current selector value, if any.
    pub fn selected(&self) -> Option<&'c FastenerRecord> {
        let catalog = self.catalog;
        catalog.find(self.select.value()?)
    }

    pub fn selector(&self) -> &S {
        &self.select
    }

    pub fn selector_mut(&mut self) -> &mut S {
        &mut self.select
    }

    pub fn details(&self) -> &D {
        &self.details
    }

    pub fn image(&self) -> &I {
        &self.image
    }

    pub fn meta(&self) -> &M {
        &self.meta
    }

    pub fn into_targets(self) -> (S, D, I, M) {
        (self.select, self.details, self.image, self.meta)
    }
}
