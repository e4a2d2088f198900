// src/gui/components/mod.rs
pub mod details_panel;
pub mod preview_panel;
pub mod selector;
pub mod status_bar;
