// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// What the static-site writer produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    pub out_dir: PathBuf,
    /// Record shown by `index.html`; `None` means the first record.
    pub selected: Option<String>,
    /// Also write one `<id>.html` per record.
    pub all_pages: bool,
    /// Write the bundled stylesheet next to the pages.
    pub write_styles: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            selected: None,
            all_pages: false,
            write_styles: true,
        }
    }
}

impl SiteOptions {
    pub fn index_path(&self) -> PathBuf {
        self.out_dir.join(INDEX_FILE)
    }

    pub fn page_path(&self, id: &str) -> PathBuf {
        self.out_dir.join(join!(id, ".html"))
    }

    pub fn styles_path(&self) -> PathBuf {
        self.out_dir.join(STYLES_FILE)
    }
}
