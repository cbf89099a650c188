use eframe::egui;

use super::app::{choice_combo, text_block, TravelApp};
use crate::engine::workflow::Action;
use crate::model::preferences::{Company, Frequency};
use crate::model::session::{TripDetails, TripDuration};

pub fn draw_plan_form(ui: &mut egui::Ui, app: &mut TravelApp) {
    ui.heading("Plan your trip");
    ui.label(format!("Destination: {}", app.ui.destination));

    let trip = &mut app.ui.trip;

    ui.label("How many days are you traveling");
    ui.add(egui::Slider::new(
        &mut trip.duration_days,
        TripDuration::MIN..=TripDuration::MAX,
    ));

    choice_combo(ui, "Who are you traveling with?", &mut trip.company, Company::ALL);
    choice_combo(
        ui,
        "How often do you want to visit museums?",
        &mut trip.museum_frequency,
        Frequency::ALL,
    );
    choice_combo(
        ui,
        "How often do you want to go to restaurants?",
        &mut trip.restaurant_frequency,
        Frequency::ALL,
    );

    let enabled = !app.ui.is_busy();
    if ui
        .add_enabled(enabled, egui::Button::new("Plan your trip"))
        .clicked()
    {
        match TripDuration::new(app.ui.trip.duration_days) {
            Ok(duration) => {
                let trip = &app.ui.trip;
                let details = TripDetails {
                    duration,
                    company: trip.company,
                    museum_frequency: trip.museum_frequency,
                    restaurant_frequency: trip.restaurant_frequency,
                };
                app.send_action(Action::PlanTrip(details));
            }
            Err(e) => app.ui.ui_error = Some(e.to_string()),
        }
    }

    if let Some(plan) = &app.ui.plan {
        ui.add_space(8.0);
        text_block(ui, plan);
    }
}
