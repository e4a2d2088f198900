// tests/html_page.rs
use fastener_gallery::config::consts::{PREVIEW_CAPTION, SELECT_ID};
use fastener_gallery::html::{self, details_html, meta_html};
use fastener_gallery::view::{DetailsFragment, MetaFragment};
use fastener_gallery::{Catalog, FastenerRecord};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn initial_page_selects_hex_bolt() {
    let mut view = html::html_view(Catalog::builtin());
    view.initialize();

    let select = view.selector().inner_html();
    assert_eq!(count(&select, "<option "), 5);
    assert!(select.starts_with("<option value=\"hex-bolt\" selected>Hex Bolt</option>"));

    let details = view.details().inner_html();
    assert_eq!(count(details, "<span class=\"tag\">"), 6);
    assert!(details.contains("<h3>Common applications</h3>"));
    assert!(details.contains("<h3>Typical materials</h3>"));
}

#[test]
fn hex_nut_meta_region_matches_page_markup() {
    let mut view = html::html_view(Catalog::builtin());
    view.initialize();
    view.select("hex-nut");

    let meta = view.meta().inner_html();
    assert!(meta.contains("<tr><th>Thread</th><td>Metric M6–M30 or UNC 1/4\"–1-1/4\"</td></tr>"));
    assert!(meta.contains(
        "<pre class=\"code-block\">python/python_fastener_export.py --fastener hex_nut --diameter 16</pre>"
    ));
    assert_eq!(count(meta, "<tr>"), 4);

    // Rows keep insertion order.
    let thread = meta.find("<th>Thread</th>").unwrap();
    let height = meta.find("<th>Height</th>").unwrap();
    let finish = meta.find("<th>Finish</th>").unwrap();
    assert!(thread < height && height < finish);

    assert_eq!(view.image().src, "assets/fasteners/hex-nut.svg");
    assert_eq!(view.image().alt, "Hex Nut preview");
}

#[test]
fn unknown_selection_keeps_regions_and_clears_select() {
    let mut view = html::html_view(Catalog::builtin());
    view.initialize();
    let details = view.details().clone();
    let meta = view.meta().clone();

    assert!(view.select("carriage-bolt").is_none());
    assert_eq!(view.details(), &details);
    assert_eq!(view.meta(), &meta);
    assert_eq!(view.details().render_count(), 1);
    assert!(!view.selector().inner_html().contains("selected"));
}

#[test]
fn same_selection_twice_renders_identical_page() {
    let mut view = html::html_view(Catalog::builtin());
    view.initialize();
    view.select("socket-cap-screw");
    let first = html::render_page(&view);
    view.select("socket-cap-screw");
    let second = html::render_page(&view);
    assert_eq!(first, second);
    assert_eq!(view.meta().render_count(), 3);
}

#[test]
fn page_embeds_targets_by_stable_id() {
    let mut view = html::html_view(Catalog::builtin());
    view.initialize();
    let page = html::render_page(&view);
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(&format!("<select id=\"{SELECT_ID}\">")));
    assert!(page.contains("<section id=\"fastener-details\""));
    assert!(page.contains("<img id=\"fastener-image\" src=\"assets/fasteners/hex-bolt.svg\" alt=\"Hex Bolt preview\" />"));
    assert!(page.contains("<div id=\"fastener-meta\""));
    assert!(page.contains("<title>Hex Bolt · Fastener Gallery</title>"));
}

#[test]
fn caption_is_fixed_text() {
    let mut view = html::html_view(Catalog::builtin());
    view.initialize();
    let a = view.meta().inner_html().to_string();
    view.select("blind-rivet");
    let b = view.meta().inner_html().to_string();
    assert!(a.contains(PREVIEW_CAPTION));
    assert!(b.contains(PREVIEW_CAPTION));
}

#[test]
fn field_markup_is_shown_not_interpreted() {
    let mut rec: FastenerRecord = Catalog::builtin().first().clone();
    rec.applications = vec!["<script>alert(1)</script>".into()];
    rec.script = "run --x <y> && z".into();

    let details = details_html(&DetailsFragment::from(&rec));
    assert!(details.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!details.contains("<script>"));

    let meta = meta_html(&MetaFragment::from(&rec));
    assert!(meta.contains("run --x &lt;y&gt; &amp;&amp; z"));
}
