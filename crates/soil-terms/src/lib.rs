#![doc = include_str!("../README.md")]

mod error;
mod lexicon;

pub use error::ParseError;

/// Structured properties extracted from a single description.
///
/// Fields that were not mentioned are left as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SoilDescription {
    /// Canonical primary soil, preferring the first noun form.
    pub primary: String,
    /// Moisture condition, e.g. `moist` or `saturated`.
    pub moisture: String,
    /// Consistency or relative density, e.g. `stiff` or `very dense`.
    pub consistency: String,
}

/// Extracts the primary soil, moisture and consistency from `description`.
///
/// The first moisture and consistency terms found win. On failure the error
/// still carries whatever was recognized, see [`ParseError::into_partial`].
pub fn parse_description(description: &str) -> Result<SoilDescription, ParseError> {
    let tokens = lexicon::tokenize(description);
    if tokens.is_empty() {
        return Err(ParseError::EmptyDescription);
    }

    let mut desc = SoilDescription::default();
    let mut fallback_primary = None;

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();

        if desc.consistency.is_empty() {
            if let Some((term, consumed)) = lexicon::consistency(&tokens[i..]) {
                desc.consistency = term;
                i += consumed;
                continue;
            }
        }

        if desc.moisture.is_empty() {
            if let Some(term) = lexicon::moisture(token) {
                desc.moisture = term.to_string();
            }
        }

        if desc.primary.is_empty() {
            match lexicon::soil(token) {
                Some(soil) if soil.is_noun => desc.primary = soil.canonical.to_string(),
                Some(soil) => {
                    fallback_primary.get_or_insert(soil.canonical);
                }
                None => {}
            }
        }

        i += 1;
    }

    if desc.primary.is_empty() {
        match fallback_primary {
            Some(primary) => desc.primary = primary.to_string(),
            None => return Err(ParseError::NoPrimarySoil { partial: desc }),
        }
    }

    Ok(desc)
}

/// Returns every recognized soil term in order of first appearance.
///
/// Terms are reported in canonical form and each appears at most once. An
/// empty or unrecognized description yields an empty list.
pub fn parse_soil_terms(description: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for token in lexicon::tokenize(description) {
        if let Some(soil) = lexicon::soil(&token) {
            if !terms.iter().any(|t| t == soil.canonical) {
                terms.push(soil.canonical.to_string());
            }
        }
    }
    terms
}
