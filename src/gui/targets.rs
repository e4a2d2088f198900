// src/gui/targets.rs
//
// In-memory render targets the egui panels draw from each frame.

use crate::view::{ImageTarget, Region, SelectOption, SelectTarget};

#[derive(Clone, Debug, Default)]
pub struct EguiSelect {
    pub options: Vec<SelectOption>,
    value: Option<String>,
}

impl EguiSelect {
    /// Label of the current option, for the closed combo box.
    pub fn selected_label(&self) -> &str {
        self.value
            .as_deref()
            .and_then(|v| self.options.iter().find(|o| o.value == v))
            .map(|o| o.label.as_str())
            .unwrap_or("")
    }
}

impl SelectTarget for EguiSelect {
    fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.value = self.options.first().map(|o| o.value.clone());
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn set_value(&mut self, value: &str) {
        self.value = self
            .options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.value.clone());
    }
}

/// Holds the last fragment a region received.
#[derive(Clone, Debug)]
pub struct Slot<T> {
    content: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self { content: None }
    }
}

impl<T> Slot<T> {
    pub fn get(&self) -> Option<&T> {
        self.content.as_ref()
    }
}

impl<T> Region<T> for Slot<T> {
    fn replace(&mut self, content: T) {
        self.content = Some(content);
    }
}

#[derive(Clone, Debug, Default)]
pub struct EguiImage {
    pub src: String,
    pub alt: String,
}

impl ImageTarget for EguiImage {
    fn set_image(&mut self, src: &str, alt: &str) {
        self.src = s!(src);
        self.alt = s!(alt);
    }
}
