// src/gui/components/selector.rs
//
// Top bar: title and the fastener combo box. A changed pick goes through
// App::select so the view re-renders from the control's value.

use eframe::egui;

use crate::config::consts::{APP_TITLE, SELECT_ID};
use crate::gui::app::App;
use crate::view::SelectTarget;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading(APP_TITLE);
        ui.separator();
        ui.label("Fastener:");

        let select = app.view.selector();
        let before = select.value().map(str::to_owned);
        let mut picked = before.clone();

        egui::ComboBox::from_id_salt(SELECT_ID)
            .selected_text(select.selected_label())
            .width(260.0)
            .show_ui(ui, |ui| {
                for opt in &select.options {
                    ui.selectable_value(&mut picked, Some(opt.value.clone()), opt.label.as_str());
                }
            });

        if picked != before {
            if let Some(id) = picked {
                app.select(&id);
            }
        }
    });
}
