// src/html.rs
//
// Headless HTML host for the catalog view. Each target keeps the markup the
// browser page would hold in the matching element; `render_page` stitches
// them into a standalone document.

use std::fmt::Write;

use crate::config::consts::*;
use crate::view::{CatalogView, DetailsFragment, ImageTarget, MetaFragment, Region, SelectOption, SelectTarget};

pub type HtmlView<'c> = CatalogView<'c, HtmlSelect, HtmlRegion, HtmlImage, HtmlRegion>;

/// A view wired to fresh HTML targets, not yet initialized.
pub fn html_view(catalog: &crate::Catalog) -> HtmlView<'_> {
    CatalogView::new(
        catalog,
        HtmlSelect::default(),
        HtmlRegion::default(),
        HtmlImage::default(),
        HtmlRegion::default(),
    )
}

/* ---------- escaping ---------- */

/// Escape for element text content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s, false);
    out
}

/// Escape for a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s, true);
    out
}

fn escape_into(out: &mut String, s: &str, quotes: bool) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/* ---------- targets ---------- */

#[derive(Clone, Debug, Default)]
pub struct HtmlSelect {
    options: Vec<SelectOption>,
    value: Option<String>,
}

impl HtmlSelect {
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// `<option>` elements; the current value carries `selected`.
    pub fn inner_html(&self) -> String {
        let mut out = s!();
        for opt in &self.options {
            let selected = if self.value.as_deref() == Some(opt.value.as_str()) {
                " selected"
            } else {
                ""
            };
            let _ = write!(
                out,
                "<option value=\"{}\"{}>{}</option>",
                escape_attr(&opt.value),
                selected,
                escape_text(&opt.label)
            );
        }
        out
    }
}

impl SelectTarget for HtmlSelect {
    fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.value = self.options.first().map(|o| o.value.clone());
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    // Like a DOM <select>: a value with no matching option clears the selection.
    fn set_value(&mut self, value: &str) {
        self.value = self
            .options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.value.clone());
    }
}

/// A container element's inner HTML.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlRegion {
    html: String,
    renders: usize,
}

impl HtmlRegion {
    pub fn inner_html(&self) -> &str {
        &self.html
    }

    /// How many times the content was replaced.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    fn set(&mut self, html: String) {
        self.html = html;
        self.renders += 1;
    }
}

impl Region<DetailsFragment> for HtmlRegion {
    fn replace(&mut self, content: DetailsFragment) {
        self.set(details_html(&content));
    }
}

impl Region<MetaFragment> for HtmlRegion {
    fn replace(&mut self, content: MetaFragment) {
        self.set(meta_html(&content));
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlImage {
    pub src: String,
    pub alt: String,
}

impl HtmlImage {
    pub fn element(&self) -> String {
        format!(
            "<img id=\"{}\" src=\"{}\" alt=\"{}\" />",
            IMAGE_ID,
            escape_attr(&self.src),
            escape_attr(&self.alt)
        )
    }
}

impl ImageTarget for HtmlImage {
    fn set_image(&mut self, src: &str, alt: &str) {
        self.src = s!(src);
        self.alt = s!(alt);
    }
}

/* ---------- fragments ---------- */

fn tags_html(tags: &[String]) -> String {
    let mut out = s!();
    for t in tags {
        let _ = write!(out, "<span class=\"tag\">{}</span>", escape_text(t));
    }
    out
}

pub fn details_html(d: &DetailsFragment) -> String {
    let mut out = s!();
    let _ = write!(out, "\n<p class=\"details__desc\">{}</p>", escape_text(&d.description));
    for (heading, tags) in [(APPLICATIONS_HEADING, &d.applications), (MATERIALS_HEADING, &d.materials)] {
        let _ = write!(
            out,
            "\n<div>\n  <h3>{}</h3>\n  <div class=\"tag-list\">{}</div>\n</div>",
            heading,
            tags_html(tags)
        );
    }
    out.push('\n');
    out
}

pub fn meta_html(m: &MetaFragment) -> String {
    let mut rows = s!();
    for (label, value) in &m.spec_rows {
        let _ = write!(
            rows,
            "\n      <tr><th>{}</th><td>{}</td></tr>",
            escape_text(label),
            escape_text(value)
        );
    }

    let mut out = s!();
    let _ = write!(
        out,
        "\n<div>\n  <h3>{}</h3>\n  <table class=\"spec-table\">\n    <tbody>{}\n    </tbody>\n  </table>\n</div>",
        SPECS_HEADING, rows
    );
    let _ = write!(
        out,
        "\n<div>\n  <h3>{}</h3>\n  <pre class=\"code-block\">{}</pre>\n  <p class=\"details__desc\">{}</p>\n</div>\n",
        SCRIPT_HEADING,
        escape_text(&m.script),
        escape_text(m.caption)
    );
    out
}

/* ---------- page ---------- */

/// Standalone document showing the view's current state.
pub fn render_page(view: &HtmlView<'_>) -> String {
    let title = match view.selected() {
        Some(r) => join!(&r.name, " · ", APP_TITLE),
        None => s!(APP_TITLE),
    };

    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"{}\" />\n</head>\n<body>\n\
         <header>\n<h1>{}</h1>\n<label for=\"{}\">Fastener</label>\n\
         <select id=\"{}\">{}</select>\n</header>\n<main>\n\
         <section id=\"{}\" class=\"details\">{}</section>\n\
         <section class=\"preview\">\n{}\n<div id=\"{}\" class=\"meta\">{}</div>\n</section>\n\
         </main>\n</body>\n</html>\n",
        escape_text(&title),
        STYLES_FILE,
        APP_TITLE,
        SELECT_ID,
        SELECT_ID,
        view.selector().inner_html(),
        DETAILS_ID,
        view.details().inner_html(),
        view.image().element(),
        META_ID,
        view.meta().inner_html(),
    );
    out
}

pub const STYLES: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; background: #f4f5f7; color: #1d232b; }
header { display: flex; gap: 1rem; align-items: center; padding: 1rem 2rem; background: #1d232b; color: #fff; }
main { display: grid; grid-template-columns: 1fr 1.4fr; gap: 2rem; padding: 2rem; }
.details__desc { line-height: 1.5; }
.tag-list { display: flex; flex-wrap: wrap; gap: .4rem; }
.tag { background: #dfe6ee; border-radius: 999px; padding: .2rem .7rem; font-size: .85rem; }
#fastener-image { max-width: 100%; max-height: 260px; display: block; margin: 0 auto 1rem; }
.spec-table { border-collapse: collapse; width: 100%; }
.spec-table th { text-align: left; padding: .3rem 1rem .3rem 0; white-space: nowrap; }
.spec-table td { padding: .3rem 0; }
.code-block { background: #1d232b; color: #d7e3f0; padding: .8rem 1rem; border-radius: 6px; overflow-x: auto; }
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_text_and_quotes_in_attributes() {
        assert_eq!(escape_text("<b>&\"</b>"), "&lt;b&gt;&amp;\"&lt;/b&gt;");
        assert_eq!(escape_attr("a\"b<"), "a&quot;b&lt;");
    }

    #[test]
    fn select_clears_value_for_unknown_option() {
        let mut sel = HtmlSelect::default();
        sel.set_options(vec![
            SelectOption { value: s!("a"), label: s!("A") },
            SelectOption { value: s!("b"), label: s!("B") },
        ]);
        sel.set_value("b");
        assert_eq!(sel.value(), Some("b"));
        assert_eq!(sel.inner_html(), "<option value=\"a\">A</option><option value=\"b\" selected>B</option>");

        sel.set_value("zzz");
        assert_eq!(sel.value(), None);
        assert!(!sel.inner_html().contains("selected"));
    }
}
