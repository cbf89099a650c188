use eframe::egui;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::mpsc;

use crate::engine::engine::Engine;
use crate::engine::image_client::{DecodedImage, UnsplashClient};
use crate::engine::llm_client::ChatCompletionClient;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::workflow::{Action, ActionKind, Transition, Workflow};
use crate::model::session::{DiscoveryPreferences, ManualPreferences, TripDuration};
use crate::model::preferences::{Company, Frequency};
use crate::ui::settings::AppSettings;
use crate::ui::settings_io::save_settings;
use crate::ui::{form_panel, plan_panel, settings_panel};

/* =========================
   Form state
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanMode {
    #[default]
    HaveDestination,
    FindDestination,
}

/// Widget values for the trip details. The slider keeps the
/// duration inside `TripDuration` bounds.
#[derive(Debug, Clone)]
pub struct TripForm {
    pub duration_days: u32,
    pub company: Company,
    pub museum_frequency: Frequency,
    pub restaurant_frequency: Frequency,
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            duration_days: TripDuration::default().days(),
            company: Company::default(),
            museum_frequency: Frequency::default(),
            restaurant_frequency: Frequency::default(),
        }
    }
}

pub struct Photo {
    pub caption: String,
    pub texture: egui::TextureHandle,
}

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub struct UiState {
    pub mode: PlanMode,
    pub discovery: DiscoveryPreferences,
    pub manual: ManualPreferences,
    pub trip: TripForm,

    /// Mirror of the engine's destination; "" until one is chosen
    pub destination: String,
    pub suggestion: Option<String>,
    pub plan: Option<String>,
    pub photo: Option<Photo>,

    pub busy: Option<ActionKind>,
    pub ui_error: Option<String>,
}

impl UiState {
    pub fn can_plan(&self) -> bool {
        !self.destination.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    fn apply_response(&mut self, ctx: &egui::Context, resp: EngineResponse) {
        match resp {
            EngineResponse::Transitioned(Transition::DestinationChosen {
                suggestion,
                choice,
                ..
            }) => {
                self.destination = choice.destination;
                self.suggestion = suggestion;
                self.plan = None;
                self.photo = None;
                self.busy = None;
            }
            EngineResponse::Transitioned(Transition::PlanGenerated { plan }) => {
                self.plan = Some(plan);
                self.busy = None;
            }
            EngineResponse::Failed {
                action,
                message,
                retryable,
            } => {
                warn!("{:?} failed: {}", action, message);
                self.ui_error = Some(if retryable {
                    format!("{message}\nPress the button again to retry.")
                } else {
                    message
                });
                self.busy = None;
            }
            EngineResponse::ImageReady { destination, image } => {
                // a newer destination may have been chosen meanwhile
                if destination == self.destination {
                    self.photo = Some(load_photo(ctx, destination, &image));
                }
            }
        }
    }
}

fn load_photo(ctx: &egui::Context, caption: String, image: &DecodedImage) -> Photo {
    let pixels = egui::ColorImage::from_rgba_unmultiplied(image.size, &image.rgba);
    let texture = ctx.load_texture("destination_photo", pixels, egui::TextureOptions::default());
    Photo { caption, texture }
}

/* =========================
   App
   ========================= */

pub struct TravelApp {
    pub ui: UiState,
    pub settings: AppSettings,
    settings_path: PathBuf,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl TravelApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: AppSettings,
        settings_path: PathBuf,
    ) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let generator = ChatCompletionClient::from_settings(&settings.llm)?;
        let images = UnsplashClient::from_settings(&settings.images)?;
        let ctx = cc.egui_ctx.clone();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, Workflow::new(generator, images))
                .with_waker(move || ctx.request_repaint());
            engine.run();
        });

        info!("Session started");

        Ok(Self {
            ui: UiState::default(),
            settings,
            settings_path,
            cmd_tx,
            resp_rx,
        })
    }

    /// Sends a commit to the engine. Ignored while another one is in flight.
    pub fn send_action(&mut self, action: Action) {
        if self.ui.is_busy() {
            return;
        }

        self.ui.ui_error = None;
        self.ui.busy = Some(action.kind());

        if self.cmd_tx.send(EngineCommand::Dispatch(action)).is_err() {
            self.ui.busy = None;
            self.ui.ui_error = Some("The planner stopped unexpectedly. Restart the app.".into());
        }
    }

    pub fn save_settings(&self) {
        if let Err(e) = save_settings(&self.settings_path, &self.settings) {
            warn!("Could not save settings: {e:#}");
        }
    }
}

impl Drop for TravelApp {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for TravelApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            self.ui.apply_response(ctx, resp);
        }

        settings_panel::draw_settings_panel(ctx, self);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("GPTravel - Holiday Planner 🏖");
                ui.separator();

                form_panel::draw_destination_form(ui, self);

                if self.ui.can_plan() {
                    ui.separator();
                    plan_panel::draw_plan_form(ui, self);
                }

                draw_status(ui, &mut self.ui);
            });
        });
    }
}

/* =========================
   UI Helpers
   ========================= */

/// Combo box over a fixed list of preference values
pub fn choice_combo<T>(ui: &mut egui::Ui, label: &str, value: &mut T, options: &[T])
where
    T: Copy + PartialEq + std::fmt::Display,
{
    egui::ComboBox::from_label(label)
        .selected_text(value.to_string())
        .show_ui(ui, |ui| {
            for &option in options {
                ui.selectable_value(value, option, option.to_string());
            }
        });
}

pub fn text_block(ui: &mut egui::Ui, text: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(text);
    });
}

fn draw_status(ui: &mut egui::Ui, state: &mut UiState) {
    if let Some(kind) = state.busy {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(match kind {
                ActionKind::FindDestination => "Looking for a destination…",
                ActionKind::SaveDestination => "Saving your destination…",
                ActionKind::PlanTrip => "Planning your trip…",
            });
        });
    }

    let mut dismiss = false;
    if let Some(err) = &state.ui_error {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::from_rgb(200, 60, 60), err.as_str());
            if ui.small_button("❌").clicked() {
                dismiss = true;
            }
        });
    }
    if dismiss {
        state.ui_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::preferences::{Activity, Budget};
    use crate::model::session::ChosenDestination;

    fn chosen(destination: &str) -> EngineResponse {
        EngineResponse::Transitioned(Transition::DestinationChosen {
            suggestion: None,
            choice: ChosenDestination {
                destination: destination.into(),
                activity: Activity::Relaxing,
                budget: Budget::Moderate,
            },
            image_url: None,
        })
    }

    #[test]
    fn destination_response_unlocks_planning() {
        let ctx = egui::Context::default();
        let mut state = UiState {
            busy: Some(ActionKind::SaveDestination),
            ..UiState::default()
        };
        assert!(!state.can_plan());

        state.apply_response(&ctx, chosen("Kyoto"));

        assert!(state.can_plan());
        assert_eq!(state.destination, "Kyoto");
        assert!(!state.is_busy());
    }

    #[test]
    fn failure_keeps_destination_and_shows_error() {
        let ctx = egui::Context::default();
        let mut state = UiState::default();
        state.apply_response(&ctx, chosen("Kyoto"));
        state.plan = Some("Day 1".into());
        state.busy = Some(ActionKind::PlanTrip);

        state.apply_response(
            &ctx,
            EngineResponse::Failed {
                action: ActionKind::PlanTrip,
                message: "Generation failed: API error 503: overloaded".into(),
                retryable: true,
            },
        );

        assert_eq!(state.destination, "Kyoto");
        assert_eq!(state.plan.as_deref(), Some("Day 1"));
        assert!(state.ui_error.as_deref().unwrap().contains("retry"));
        assert!(!state.is_busy());
    }

    #[test]
    fn stale_photo_is_ignored() {
        let ctx = egui::Context::default();
        let mut state = UiState::default();
        state.apply_response(&ctx, chosen("Crete"));

        state.apply_response(
            &ctx,
            EngineResponse::ImageReady {
                destination: "Kyoto".into(),
                image: DecodedImage {
                    size: [1, 1],
                    rgba: vec![255, 255, 255, 255],
                },
            },
        );

        assert!(state.photo.is_none());
    }

    #[test]
    fn new_destination_clears_previous_plan() {
        let ctx = egui::Context::default();
        let mut state = UiState::default();
        state.apply_response(&ctx, chosen("Kyoto"));
        state.apply_response(
            &ctx,
            EngineResponse::Transitioned(Transition::PlanGenerated { plan: "Day 1".into() }),
        );

        state.apply_response(&ctx, chosen("Crete"));

        assert_eq!(state.destination, "Crete");
        assert_eq!(state.plan, None);
    }
}
