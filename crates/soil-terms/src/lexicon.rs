//! Vocabulary tables used by the extractors.
//!
//! Every table maps a lower-case token to the canonical term reported to
//! callers. Adjectival forms (`sandy`, `gravelly`) are kept apart from the
//! nouns so the primary soil can prefer a noun.

/// Noun forms of soil and rock terms.
const SOIL_NOUNS: &[(&str, &str)] = &[
    ("clay", "clay"),
    ("clays", "clay"),
    ("silt", "silt"),
    ("silts", "silt"),
    ("sand", "sand"),
    ("sands", "sand"),
    ("gravel", "gravel"),
    ("gravels", "gravel"),
    ("cobble", "cobbles"),
    ("cobbles", "cobbles"),
    ("boulder", "boulders"),
    ("boulders", "boulders"),
    ("till", "till"),
    ("hardpan", "hardpan"),
    ("peat", "peat"),
    ("organics", "organics"),
    ("topsoil", "topsoil"),
    ("fill", "fill"),
    ("bedrock", "bedrock"),
    ("rock", "rock"),
    ("shale", "shale"),
    ("sandstone", "sandstone"),
    ("siltstone", "siltstone"),
    ("mudstone", "mudstone"),
    ("claystone", "claystone"),
    ("conglomerate", "conglomerate"),
    ("limestone", "limestone"),
    ("granite", "granite"),
    ("basalt", "basalt"),
];

/// Adjectival forms, reported under the canonical noun.
const SOIL_ADJECTIVES: &[(&str, &str)] = &[
    ("clayey", "clay"),
    ("silty", "silt"),
    ("sandy", "sand"),
    ("gravelly", "gravel"),
    ("bouldery", "boulders"),
    ("peaty", "peat"),
    ("organic", "organics"),
];

const MOISTURE: &[&str] = &["dry", "damp", "moist", "wet", "saturated"];

/// Consistency (cohesive soils) and relative density (granular soils) share
/// one field.
const CONSISTENCY: &[&str] = &[
    "soft", "firm", "stiff", "hard", "loose", "compact", "dense",
];

/// Terms that may be qualified with a leading `very`.
const INTENSIFIABLE: &[&str] = &["soft", "stiff", "loose", "dense"];

/// A recognized soil token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SoilToken {
    pub canonical: &'static str,
    pub is_noun: bool,
}

pub(crate) fn soil(token: &str) -> Option<SoilToken> {
    lookup(SOIL_NOUNS, token)
        .map(|canonical| SoilToken {
            canonical,
            is_noun: true,
        })
        .or_else(|| {
            lookup(SOIL_ADJECTIVES, token).map(|canonical| SoilToken {
                canonical,
                is_noun: false,
            })
        })
}

pub(crate) fn moisture(token: &str) -> Option<&'static str> {
    MOISTURE.iter().copied().find(|m| *m == token)
}

/// Matches a consistency term starting at `tokens[0]`, returning the
/// canonical term and how many tokens it consumed.
pub(crate) fn consistency(tokens: &[String]) -> Option<(String, usize)> {
    let first = tokens.first()?;
    if first == "very" {
        if let Some(next) = tokens.get(1) {
            if INTENSIFIABLE.contains(&next.as_str()) {
                return Some((format!("very {next}"), 2));
            }
        }
    }
    CONSISTENCY
        .iter()
        .find(|c| **c == first.as_str())
        .map(|c| ((*c).to_string(), 1))
}

fn lookup(table: &[(&str, &'static str)], token: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(form, _)| *form == token)
        .map(|(_, canonical)| *canonical)
}

/// Splits a description into lower-case alphabetic words.
pub(crate) fn tokenize(description: &str) -> Vec<String> {
    description
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}
