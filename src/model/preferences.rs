use serde::{Deserialize, Serialize};
use std::fmt;

/// Generates a preference enum with a display label per variant
/// and an `ALL` list in the order the form shows them.
macro_rules! preference_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

preference_enum! {
    /// What the traveller mostly wants to do.
    Activity {
        Relaxing => "Relaxing",
        Exploring => "Exploring",
        Sightseeing => "Sightseeing",
        Sportive => "Sportive",
        Educational => "Educational",
    }
}

preference_enum! {
    Budget {
        Expensive => "Expensive",
        Moderate => "Moderate",
        Affordable => "Affordable",
        ZeroBudget => "Zero budget",
    }
}

preference_enum! {
    Weather {
        Tropical => "Tropical",
        Mediterranean => "Mediterranean",
        Temperate => "Temperate",
        Cold => "Cold",
    }
}

preference_enum! {
    Region {
        Europe => "Europe",
        NorthAmerica => "North America",
        SouthAmerica => "South America",
        Africa => "Africa",
        MiddleEast => "Middle East",
        Asia => "Asia",
        Oceania => "Oceania",
    }
}

preference_enum! {
    /// Who comes along on the trip.
    Company {
        Alone => "Alone",
        Partner => "Partner",
        Friends => "Friends",
        Family => "Family",
    }
}

preference_enum! {
    /// How often to visit museums or restaurants.
    Frequency {
        Often => "Often",
        Sometimes => "Sometimes",
        Never => "Never",
    }
}

impl Default for Activity {
    fn default() -> Self {
        Activity::Relaxing
    }
}

impl Default for Budget {
    fn default() -> Self {
        Budget::Expensive
    }
}

impl Default for Weather {
    fn default() -> Self {
        Weather::Tropical
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::Europe
    }
}

impl Default for Company {
    fn default() -> Self {
        Company::Alone
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Often
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_human_wording() {
        assert_eq!(Budget::ZeroBudget.label(), "Zero budget");
        assert_eq!(Region::NorthAmerica.to_string(), "North America");
        assert_eq!(Region::MiddleEast.to_string(), "Middle East");
        assert_eq!(Activity::Sightseeing.to_string(), "Sightseeing");
    }

    #[test]
    fn all_lists_every_variant_in_form_order() {
        assert_eq!(Activity::ALL.len(), 5);
        assert_eq!(Budget::ALL.len(), 4);
        assert_eq!(Weather::ALL.len(), 4);
        assert_eq!(Region::ALL.len(), 7);
        assert_eq!(Company::ALL.len(), 4);
        assert_eq!(Frequency::ALL.len(), 3);

        assert_eq!(Region::ALL.first(), Some(&Region::Europe));
        assert_eq!(Region::ALL.last(), Some(&Region::Oceania));
    }

    #[test]
    fn defaults_match_first_choice() {
        assert_eq!(Activity::default(), Activity::ALL[0]);
        assert_eq!(Budget::default(), Budget::ALL[0]);
        assert_eq!(Weather::default(), Weather::ALL[0]);
        assert_eq!(Region::default(), Region::ALL[0]);
        assert_eq!(Company::default(), Company::ALL[0]);
        assert_eq!(Frequency::default(), Frequency::ALL[0]);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Budget::ZeroBudget).unwrap();
        assert_eq!(json, "\"zero_budget\"");
    }
}
