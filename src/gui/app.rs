// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    catalog::Catalog,
    config::{consts::APP_TITLE, state::GuiState},
    view::{CatalogView, DetailsFragment, MetaFragment, SelectTarget},
};

use super::{
    components,
    targets::{EguiImage, EguiSelect, Slot},
};

pub type GuiView = CatalogView<'static, EguiSelect, Slot<DetailsFragment>, EguiImage, Slot<MetaFragment>>;

pub fn run(options: eframe::NativeOptions, state: GuiState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            // file:// + SVG loaders for the preview image
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(Catalog::builtin(), state)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // selection lives in the view's selector, nowhere else
    pub view: GuiView,
    pub state: GuiState,
}

impl App {
    pub fn new(catalog: &'static Catalog, state: GuiState) -> Self {
        let view = CatalogView::new(
            catalog,
            EguiSelect::default(),
            Slot::default(),
            EguiImage::default(),
            Slot::default(),
        );
        let mut app = Self { view, state };
        if let Some(r) = app.view.initialize() {
            app.status(format!("Showing {}", r.name));
        }
        logf!("Init: {} fastener(s), asset root {}", catalog.len(), app.state.asset_root.display());
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.state.status = msg.into();
    }

    /// Combo box picked `id`: update the control, then run the change handler.
    pub fn select(&mut self, id: &str) {
        self.view.selector_mut().set_value(id);
        self.on_selection_changed();
    }

    pub fn on_selection_changed(&mut self) {
        if let Some(r) = self.view.on_selection_changed() {
            logf!("UI: Selection → {}", r.id);
            self.status(format!("Showing {}", r.name));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("selector").show(ctx, |ui| {
            components::selector::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::SidePanel::left("details")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                components::details_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::preview_panel::draw(ui, self);
        });
    }
}
