use serde::{Deserialize, Serialize};

use crate::engine::error::WorkflowError;
use crate::model::preferences::{Activity, Budget, Company, Frequency, Region, Weather};

/// Inputs of the discovery path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryPreferences {
    pub activity: Activity,
    pub weather: Weather,
    pub budget: Budget,
    pub region: Region,
}

/// Inputs of the manual path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualPreferences {
    pub destination: String,
    pub activity: Activity,
    pub budget: Budget,
}

/// Destination together with the preferences it was chosen with.
/// The three fields only ever change as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenDestination {
    pub destination: String,
    pub activity: Activity,
    pub budget: Budget,
}

/// Length of the trip in days, within 1..=28
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TripDuration(u32);

impl TripDuration {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 28;

    pub fn new(days: u32) -> Result<Self, WorkflowError> {
        if (Self::MIN..=Self::MAX).contains(&days) {
            Ok(Self(days))
        } else {
            Err(WorkflowError::InvalidDuration(days))
        }
    }

    pub fn days(self) -> u32 {
        self.0
    }
}

impl Default for TripDuration {
    fn default() -> Self {
        Self(7)
    }
}

impl TryFrom<u32> for TripDuration {
    type Error = WorkflowError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<TripDuration> for u32 {
    fn from(duration: TripDuration) -> Self {
        duration.0
    }
}

/// Inputs collected at planning time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetails {
    pub duration: TripDuration,
    pub company: Company,
    pub museum_frequency: Frequency,
    pub restaurant_frequency: Frequency,
}
