// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod gui;
pub mod html;
pub mod site;
pub mod view;

#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::{Catalog, FastenerRecord, SpecTable};
pub use error::{Error, Result};
pub use view::CatalogView;
