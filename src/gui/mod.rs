// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod targets;

pub use app::run;
