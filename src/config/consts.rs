// src/config/consts.rs

// App
pub const APP_TITLE: &str = "Fastener Gallery";
pub const WINDOW_W: u32 = 1100;
pub const WINDOW_H: u32 = 700;

// Local store (logs)
pub const STORE_DIR: &str = ".gallery";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "GALLERY_LOG";

// Assets: record image paths are relative to this root
pub const DEFAULT_ASSET_ROOT: &str = ".";

// Static site
pub const DEFAULT_OUT_DIR: &str = "site";
pub const INDEX_FILE: &str = "index.html";
pub const STYLES_FILE: &str = "styles.css";

// Stable element ids of the page
pub const SELECT_ID: &str = "fastener-select";
pub const DETAILS_ID: &str = "fastener-details";
pub const IMAGE_ID: &str = "fastener-image";
pub const META_ID: &str = "fastener-meta";

// Section headings
pub const APPLICATIONS_HEADING: &str = "Common applications";
pub const MATERIALS_HEADING: &str = "Typical materials";
pub const SPECS_HEADING: &str = "Specification snapshot";
pub const SCRIPT_HEADING: &str = "FreeCAD export command";

// Export helper
pub const EXPORT_SCRIPT: &str = "python/python_fastener_export.py";

/// Fixed text shown under the export command. Never derived from record data.
pub const PREVIEW_CAPTION: &str = "Use the python_fastener_export.py helper script to export \
neutral .step and .stl references. Replace the parameters to match your production \
hardware, then refresh the gallery.";
