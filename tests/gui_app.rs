// tests/gui_app.rs
use fastener_gallery::config::consts::{WINDOW_H, WINDOW_W};
use fastener_gallery::config::state::GuiState;
use fastener_gallery::gui::app::App;
use fastener_gallery::view::SelectTarget;
use fastener_gallery::Catalog;

fn app() -> App {
    App::new(Catalog::builtin(), GuiState::default())
}

#[test]
fn new_app_shows_first_fastener() {
    let app = app();
    assert_eq!(app.state.status, "Showing Hex Bolt");
    assert_eq!(app.view.selected().map(|r| r.id.as_str()), Some("hex-bolt"));
    assert_eq!(app.view.selector().value(), Some("hex-bolt"));
}

#[test]
fn select_updates_status_and_panels() {
    let mut app = app();
    app.select("blind-rivet");
    assert_eq!(app.state.status, "Showing Blind Rivet");
    assert_eq!(app.view.image().src, "assets/fasteners/blind-rivet.svg");
    let meta = app.view.meta().get().unwrap();
    assert!(meta.script.ends_with("--grip 6.0"));
}

#[test]
fn unknown_selection_leaves_status_alone() {
    let mut app = app();
    app.select("hex-nut");
    app.status("Copied export command to clipboard");
    app.select("missing");
    assert_eq!(app.state.status, "Copied export command to clipboard");
    let details = app.view.details().get().unwrap();
    assert!(details.description.starts_with("A hexagonal nut"));
}

#[test]
fn default_state_sizes_the_window() {
    assert_eq!(GuiState::default().inner_size(), [WINDOW_W as f32, WINDOW_H as f32]);
}
