// src/site.rs
//
// Writes static snapshots of the gallery page. Every page goes through a
// CatalogView with HTML targets, exactly like an interactive selection would.

use std::fs;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::options::SiteOptions;
use crate::error::{Error, Result};
use crate::html::{self, HtmlView};

/// Render the page with `id` selected (first record when `None`).
pub fn render_selected(catalog: &Catalog, id: Option<&str>) -> Result<String> {
    let mut view = html::html_view(catalog);
    view.initialize();
    if let Some(id) = id {
        select_known(&mut view, id)?;
    }
    Ok(html::render_page(&view))
}

fn select_known(view: &mut HtmlView<'_>, id: &str) -> Result<()> {
    match view.select(id) {
        Some(_) => Ok(()),
        None => Err(Error::UnknownFastener(s!(id))),
    }
}

/// Write `index.html` (plus per-record pages and the stylesheet, per options).
/// Returns the written paths in write order.
pub fn write_site(catalog: &Catalog, opts: &SiteOptions) -> Result<Vec<PathBuf>> {
    // Validate before touching the filesystem.
    if let Some(id) = &opts.selected {
        if catalog.find(id).is_none() {
            return Err(Error::UnknownFastener(id.clone()));
        }
    }

    fs::create_dir_all(&opts.out_dir)?;
    let mut written = Vec::new();

    let mut view = html::html_view(catalog);
    view.initialize();
    if let Some(id) = &opts.selected {
        select_known(&mut view, id)?;
    }
    let index = opts.index_path();
    fs::write(&index, html::render_page(&view))?;
    written.push(index);

    if opts.all_pages {
        for record in catalog {
            select_known(&mut view, &record.id)?;
            let path = opts.page_path(&record.id);
            fs::write(&path, html::render_page(&view))?;
            written.push(path);
        }
    }

    if opts.write_styles {
        let path = opts.styles_path();
        fs::write(&path, html::STYLES)?;
        written.push(path);
    }

    logf!("Site: wrote {} file(s) to {}", written.len(), opts.out_dir.display());
    Ok(written)
}
