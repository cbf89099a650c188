use log::{debug, error, info};

use crate::engine::destination_parser::parse_destination;
use crate::engine::error::{GenerationError, WorkflowError};
use crate::engine::image_client::ImageLookup;
use crate::engine::llm_client::TextGenerator;
use crate::engine::prompt_builder::PromptBuilder;
use crate::model::session::{
    ChosenDestination, DiscoveryPreferences, ManualPreferences, TripDetails,
};

/// A user-triggered commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FindDestination(DiscoveryPreferences),
    SaveDestination(ManualPreferences),
    PlanTrip(TripDetails),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    FindDestination,
    SaveDestination,
    PlanTrip,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::FindDestination(_) => ActionKind::FindDestination,
            Action::SaveDestination(_) => ActionKind::SaveDestination,
            Action::PlanTrip(_) => ActionKind::PlanTrip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoDestination,
    DestinationChosen {
        choice: ChosenDestination,
    },
    PlanGenerated {
        choice: ChosenDestination,
        plan: String,
    },
}

/// What a successful action produced, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    DestinationChosen {
        /// Full suggestion text; `None` on the manual path
        suggestion: Option<String>,
        choice: ChosenDestination,
        image_url: Option<String>,
    },
    PlanGenerated {
        plan: String,
    },
}

/// Session workflow. `dispatch` is the only writer of the session state,
/// and a failed action leaves the state untouched.
pub struct Workflow<G, I> {
    generator: G,
    images: I,
    state: SessionState,
}

impl<G: TextGenerator, I: ImageLookup> Workflow<G, I> {
    pub fn new(generator: G, images: I) -> Self {
        Self {
            generator,
            images,
            state: SessionState::NoDestination,
        }
    }

    pub fn images(&self) -> &I {
        &self.images
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn choice(&self) -> Option<&ChosenDestination> {
        match &self.state {
            SessionState::NoDestination => None,
            SessionState::DestinationChosen { choice }
            | SessionState::PlanGenerated { choice, .. } => Some(choice),
        }
    }

    /// The chosen destination, or "" when none has been chosen yet
    pub fn destination(&self) -> &str {
        self.choice().map(|c| c.destination.as_str()).unwrap_or("")
    }

    /// Whether the trip-detail inputs should be offered
    pub fn can_plan(&self) -> bool {
        !self.destination().is_empty()
    }

    pub fn latest_plan(&self) -> Option<&str> {
        match &self.state {
            SessionState::PlanGenerated { plan, .. } => Some(plan),
            _ => None,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Transition, WorkflowError> {
        let kind = action.kind();
        let result = match action {
            Action::FindDestination(prefs) => self.find_destination(prefs),
            Action::SaveDestination(prefs) => self.save_destination(prefs),
            Action::PlanTrip(details) => self.plan_trip(details),
        };

        if let Err(e) = &result {
            error!("{:?} failed: {}", kind, e);
        }
        result
    }

    fn find_destination(
        &mut self,
        prefs: DiscoveryPreferences,
    ) -> Result<Transition, WorkflowError> {
        let prompt = PromptBuilder::destination(&prefs).map_err(GenerationError::from)?;
        debug!("Destination prompt:\n{}", prompt);

        let suggestion = self.generator.generate(&prompt)?;
        let destination = parse_destination(&suggestion);
        if destination.is_empty() {
            return Err(WorkflowError::EmptySuggestion);
        }

        let choice = ChosenDestination {
            destination,
            activity: prefs.activity,
            budget: prefs.budget,
        };
        Ok(self.commit_destination(choice, Some(suggestion)))
    }

    fn save_destination(&mut self, prefs: ManualPreferences) -> Result<Transition, WorkflowError> {
        if prefs.destination.trim().is_empty() {
            return Err(WorkflowError::EmptyDestination);
        }

        let choice = ChosenDestination {
            destination: prefs.destination,
            activity: prefs.activity,
            budget: prefs.budget,
        };
        Ok(self.commit_destination(choice, None))
    }

    fn commit_destination(
        &mut self,
        choice: ChosenDestination,
        suggestion: Option<String>,
    ) -> Transition {
        info!(
            "Destination chosen: {} ({}, {})",
            choice.destination, choice.activity, choice.budget
        );

        self.state = SessionState::DestinationChosen {
            choice: choice.clone(),
        };

        let image_url = self.images.find_image(&choice.destination);
        if image_url.is_none() {
            info!("No image found for {}", choice.destination);
        }

        Transition::DestinationChosen {
            suggestion,
            choice,
            image_url,
        }
    }

    fn plan_trip(&mut self, details: TripDetails) -> Result<Transition, WorkflowError> {
        let choice = self.choice().cloned().ok_or(WorkflowError::NoDestination)?;

        let prompt =
            PromptBuilder::trip_plan(&choice, &details).map_err(GenerationError::from)?;
        debug!("Trip plan prompt:\n{}", prompt);

        let plan = self.generator.generate(&prompt)?;
        info!(
            "Plan generated for {} ({} days)",
            choice.destination,
            details.duration.days()
        );

        self.state = SessionState::PlanGenerated {
            choice,
            plan: plan.clone(),
        };
        Ok(Transition::PlanGenerated { plan })
    }
}
