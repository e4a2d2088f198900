// src/gui/components/details_panel.rs
use eframe::egui::{self, RichText};

use crate::config::consts::{APPLICATIONS_HEADING, MATERIALS_HEADING};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(details) = app.view.details().get() else {
        ui.weak("No fastener selected");
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("details_scroll")
        .show(ui, |ui| {
            ui.add_space(6.0);
            ui.label(details.description.as_str());
            ui.add_space(12.0);
            tag_list(ui, APPLICATIONS_HEADING, &details.applications);
            ui.add_space(12.0);
            tag_list(ui, MATERIALS_HEADING, &details.materials);
        });
}

fn tag_list(ui: &mut egui::Ui, heading: &str, tags: &[String]) {
    ui.label(RichText::new(heading).strong().size(15.0));
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(tag.as_str()).small());
            });
        }
    });
}
