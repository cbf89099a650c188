use crate::engine::error::TemplateError;
use crate::model::session::{ChosenDestination, DiscoveryPreferences, TripDetails};

/// Fixed prompt text with `{name}` placeholders.
pub struct PromptTemplate {
    pub input_variables: &'static [&'static str],
    pub template: &'static str,
}

impl PromptTemplate {
    /// Substitutes every declared variable in a single pass over the
    /// template. Values are inserted as-is and never scanned again.
    pub fn format(&self, values: &[(&str, String)]) -> Result<String, TemplateError> {
        let lookup = |name: &str| {
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str())
        };

        for name in self.input_variables {
            if lookup(*name).is_none() {
                return Err(TemplateError::MissingVariable((*name).to_string()));
            }
        }

        let mut prompt = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(start) = rest.find('{') {
            prompt.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let placeholder = after
                .find('}')
                .map(|end| (&after[..end], end))
                .filter(|(name, _)| self.input_variables.iter().any(|v| v == name));

            match placeholder.and_then(|(name, end)| lookup(name).map(|value| (value, end))) {
                Some((value, end)) => {
                    prompt.push_str(value);
                    rest = &after[end + 1..];
                }
                None => {
                    prompt.push('{');
                    rest = after;
                }
            }
        }
        prompt.push_str(rest);

        Ok(prompt)
    }
}

pub const DESTINATION_TEMPLATE: PromptTemplate = PromptTemplate {
    input_variables: &["activity", "weather", "budget", "region"],
    template: "Suggest a travel destination that fits the user's preferences.\n\
Start with the name of the destination, followed by a dot.\n\
Preferred activity: {activity}\n\
Preferred weather: {weather}\n\
Budget: {budget}\n\
Region: {region}\n\
Example output: Crete. Enjoy the Mediterranean sun while relaxing on the beach \
or exploring the many small villages and vibrant cities. With its affordable \
accommodation and beautiful scenery, it's the perfect getaway.\n\
Output: ",
};

pub const TRIP_PLAN_TEMPLATE: PromptTemplate = PromptTemplate {
    input_variables: &[
        "destination",
        "duration",
        "activity",
        "budget",
        "company",
        "museum_frequency",
        "restaurant_frequency",
    ],
    template: "Plan a holiday for the user. The user wants to travel to {destination} for {duration} days.\n\
During the holiday the user prefers: {activity}. The budget for the holiday is: {budget}.\n\
The user travels with: {company}. How often the user wants to visit museums: {museum_frequency}. \
How often the user wants to go to restaurants: {restaurant_frequency}.\n\
Example output:\n\
San Diego is an ideal destination for a 3-day holiday with its beaches, pleasant climate and great attractions.\n\
Here is a suggested itinerary for a moderate budget holiday in San Diego with your partner:\n\
Day 1: Arrive and check into your hotel. Explore the Gaslamp District and enjoy the views from Mount Soledad.\n\
Day 2: Spend the day in Balboa Park and visit the San Diego Zoo.\n\
Day 3: Take a boat tour of the bay, then have dinner at one of the restaurants in Little Italy.\n\
Enjoy your holiday!\n\
Output: ",
};

/// Builds the prompts sent to the text completion service.
/// Only formats text: no parsing, no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn destination(prefs: &DiscoveryPreferences) -> Result<String, TemplateError> {
        DESTINATION_TEMPLATE.format(&[
            ("activity", prefs.activity.to_string()),
            ("weather", prefs.weather.to_string()),
            ("budget", prefs.budget.to_string()),
            ("region", prefs.region.to_string()),
        ])
    }

    pub fn trip_plan(
        choice: &ChosenDestination,
        details: &TripDetails,
    ) -> Result<String, TemplateError> {
        TRIP_PLAN_TEMPLATE.format(&[
            ("destination", choice.destination.clone()),
            ("duration", details.duration.days().to_string()),
            ("activity", choice.activity.to_string()),
            ("budget", choice.budget.to_string()),
            ("company", details.company.to_string()),
            ("museum_frequency", details.museum_frequency.to_string()),
            ("restaurant_frequency", details.restaurant_frequency.to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::preferences::*;
    use crate::model::session::TripDuration;

    #[test]
    fn format_places_values_at_placeholders() {
        let template = PromptTemplate {
            input_variables: &["a", "b"],
            template: "first {a}, second {b}, again {a}",
        };

        let out = template
            .format(&[("b", "two".into()), ("a", "one".into())])
            .unwrap();
        assert_eq!(out, "first one, second two, again one");
    }

    #[test]
    fn format_does_not_escape_values() {
        let template = PromptTemplate {
            input_variables: &["a"],
            template: "[{a}]",
        };

        let out = template.format(&[("a", "{b} \"quoted\"".into())]).unwrap();
        assert_eq!(out, "[{b} \"quoted\"]");
    }

    #[test]
    fn format_keeps_placeholder_text_inside_values() {
        let template = PromptTemplate {
            input_variables: &["a", "b"],
            template: "{a} then {b}",
        };

        let out = template
            .format(&[("a", "x {b} y".into()), ("b", "two".into())])
            .unwrap();
        assert_eq!(out, "x {b} y then two");
    }

    #[test]
    fn format_leaves_undeclared_braces_alone() {
        let template = PromptTemplate {
            input_variables: &["a"],
            template: "{ {a} {other} }",
        };

        let out = template.format(&[("a", "one".into())]).unwrap();
        assert_eq!(out, "{ one {other} }");
    }

    #[test]
    fn free_text_destination_reaches_plan_prompt_unchanged() {
        let choice = ChosenDestination {
            destination: "Lake {budget}".into(),
            activity: Activity::Relaxing,
            budget: Budget::Affordable,
        };
        let details = TripDetails {
            duration: TripDuration::new(3).unwrap(),
            ..TripDetails::default()
        };

        let prompt = PromptBuilder::trip_plan(&choice, &details).unwrap();

        assert!(prompt.contains("travel to Lake {budget} for 3 days"));
        assert!(prompt.contains("budget for the holiday is: Affordable."));
    }

    #[test]
    fn format_reports_missing_variable() {
        let err = DESTINATION_TEMPLATE
            .format(&[("activity", "Relaxing".into())])
            .unwrap_err();
        assert_eq!(err, TemplateError::MissingVariable("weather".into()));
    }

    #[test]
    fn destination_prompt_contains_preferences() {
        let prompt = PromptBuilder::destination(&DiscoveryPreferences {
            activity: Activity::Sightseeing,
            weather: Weather::Mediterranean,
            budget: Budget::ZeroBudget,
            region: Region::SouthAmerica,
        })
        .unwrap();

        assert!(prompt.contains("Preferred activity: Sightseeing\n"));
        assert!(prompt.contains("Preferred weather: Mediterranean\n"));
        assert!(prompt.contains("Budget: Zero budget\n"));
        assert!(prompt.contains("Region: South America\n"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn trip_plan_prompt_contains_choice_and_details() {
        let choice = ChosenDestination {
            destination: "Kyoto".into(),
            activity: Activity::Educational,
            budget: Budget::Affordable,
        };
        let details = TripDetails {
            duration: TripDuration::new(12).unwrap(),
            company: Company::Friends,
            museum_frequency: Frequency::Often,
            restaurant_frequency: Frequency::Never,
        };

        let prompt = PromptBuilder::trip_plan(&choice, &details).unwrap();

        assert!(prompt.contains("travel to Kyoto for 12 days"));
        assert!(prompt.contains("prefers: Educational."));
        assert!(prompt.contains("budget for the holiday is: Affordable."));
        assert!(prompt.contains("travels with: Friends."));
        assert!(prompt.contains("visit museums: Often."));
        assert!(prompt.contains("go to restaurants: Never."));
        assert!(!prompt.contains('{'));
    }
}
