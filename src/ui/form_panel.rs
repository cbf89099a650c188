use eframe::egui;

use super::app::{choice_combo, text_block, PlanMode, TravelApp, UiState};
use crate::engine::workflow::Action;
use crate::model::preferences::{Activity, Budget, Region, Weather};

pub fn draw_destination_form(ui: &mut egui::Ui, app: &mut TravelApp) {
    ui.label("Choose your option:");
    ui.radio_value(
        &mut app.ui.mode,
        PlanMode::HaveDestination,
        "I already have a destination and I only want to plan my trip",
    );
    ui.radio_value(
        &mut app.ui.mode,
        PlanMode::FindDestination,
        "I want to find a travel destination and plan my trip",
    );

    ui.add_space(8.0);

    let action = match app.ui.mode {
        PlanMode::FindDestination => draw_discovery(ui, &mut app.ui),
        PlanMode::HaveDestination => draw_manual(ui, &mut app.ui),
    };

    if let Some(action) = action {
        app.send_action(action);
    }

    draw_destination(ui, &app.ui);
}

/* =========================
   Discovery
   ========================= */

fn draw_discovery(ui: &mut egui::Ui, state: &mut UiState) -> Option<Action> {
    let prefs = &mut state.discovery;

    choice_combo(ui, "Select preferred activity", &mut prefs.activity, Activity::ALL);
    choice_combo(ui, "Select preferred weather", &mut prefs.weather, Weather::ALL);
    choice_combo(ui, "Select budget", &mut prefs.budget, Budget::ALL);
    choice_combo(ui, "Select region", &mut prefs.region, Region::ALL);

    let enabled = state.busy.is_none();
    if ui
        .add_enabled(enabled, egui::Button::new("Find Destination"))
        .clicked()
    {
        return Some(Action::FindDestination(state.discovery));
    }
    None
}

/* =========================
   Manual
   ========================= */

fn draw_manual(ui: &mut egui::Ui, state: &mut UiState) -> Option<Action> {
    let prefs = &mut state.manual;

    ui.label("What is your destination?");
    ui.text_edit_singleline(&mut prefs.destination);

    choice_combo(ui, "Select preferred activity", &mut prefs.activity, Activity::ALL);
    choice_combo(ui, "Select budget", &mut prefs.budget, Budget::ALL);

    let enabled = state.busy.is_none() && !prefs.destination.trim().is_empty();
    if ui
        .add_enabled(enabled, egui::Button::new("Save preferences"))
        .clicked()
    {
        return Some(Action::SaveDestination(state.manual.clone()));
    }
    None
}

/* =========================
   Result
   ========================= */

fn draw_destination(ui: &mut egui::Ui, state: &UiState) {
    if let Some(text) = &state.suggestion {
        ui.add_space(8.0);
        text_block(ui, text);
    }

    if let Some(photo) = &state.photo {
        ui.add_space(8.0);
        ui.add(
            egui::Image::from_texture(&photo.texture)
                .max_width(ui.available_width())
                .maintain_aspect_ratio(true),
        );
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&photo.caption).italics());
        });
    }
}
