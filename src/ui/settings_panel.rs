use eframe::egui;

use super::app::TravelApp;

pub fn draw_settings_panel(ctx: &egui::Context, app: &mut TravelApp) {
    egui::SidePanel::left("settings")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.label("UI Scale");
            let scale = ui.add(egui::Slider::new(&mut app.settings.ui_scale, 0.75..=2.0));
            if scale.drag_stopped() || (scale.changed() && !scale.dragged()) {
                app.save_settings();
            }

            ui.separator();
            ui.label("Text model");
            ui.monospace(app.settings.llm.model.as_str());

            ui.add_space(6.0);
            ui.label("Keys are read from");
            ui.monospace(app.settings.llm.api_key_env.as_str());
            ui.monospace(app.settings.images.access_key_env.as_str());
        });
}
