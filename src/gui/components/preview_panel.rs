// src/gui/components/preview_panel.rs
//
// Image, spec table, export command (copyable) and the fixed caption.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{SCRIPT_HEADING, SPECS_HEADING};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let image = app.view.image();
    if !image.src.is_empty() {
        let uri = app.state.image_uri(&image.src);
        ui.vertical_centered(|ui| {
            ui.add(egui::Image::new(uri).max_height(220.0))
                .on_hover_text(image.alt.as_str());
        });
        ui.add_space(8.0);
    }

    let Some(meta) = app.view.meta().get() else {
        return;
    };

    ui.label(RichText::new(SPECS_HEADING).strong().size(15.0));
    spec_table(ui, &meta.spec_rows);
    ui.add_space(12.0);

    ui.label(RichText::new(SCRIPT_HEADING).strong().size(15.0));
    let mut copy_clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.add(egui::Label::new(RichText::new(meta.script.as_str()).monospace()).selectable(true));
            if ui.button("Copy").clicked() {
                copy_clicked = true;
            }
        });
    });
    ui.add_space(4.0);
    ui.label(RichText::new(meta.caption).weak());

    if copy_clicked {
        let script = meta.script.clone();
        ui.ctx().copy_text(script);
        logd!("Copy: export command");
        app.status("Copied export command to clipboard");
    }
}

fn spec_table(ui: &mut egui::Ui, rows: &[(String, String)]) {
    TableBuilder::new(ui)
        .id_salt("spec_table")
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(110.0))
        .column(Column::remainder())
        .body(|mut body| {
            for (label, value) in rows {
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        ui.strong(label.as_str());
                    });
                    row.col(|ui| {
                        ui.label(value.as_str());
                    });
                });
            }
        });
}
