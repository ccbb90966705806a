//! Adapter from the `soil-terms` lexicon to [`SoilDescriptionParser`].

use lithology_core::{Error, Outcome, Result, SoilDescriptionParser, SoilProperties};

/// Parsing delegate backed by the `soil-terms` lexicon.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexiconParser;

impl SoilDescriptionParser for LexiconParser {
    fn parse_properties(&self, description: &str) -> Outcome<SoilProperties> {
        match soil_terms::parse_description(description) {
            Ok(desc) => Outcome::ok(SoilProperties {
                moisture: desc.moisture,
                consistency: desc.consistency,
            }),
            Err(err) => {
                let reason = err.to_string();
                let partial = err.into_partial();
                Outcome::partial(
                    SoilProperties {
                        moisture: partial.moisture,
                        consistency: partial.consistency,
                    },
                    Error::PropertyExtraction { reason },
                )
            }
        }
    }

    fn parse_terms(&self, description: &str) -> Result<Vec<String>> {
        Ok(soil_terms::parse_soil_terms(description))
    }
}
