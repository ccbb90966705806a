//! The parsing delegate seam.
//!
//! The service performs no text analysis itself. Everything it reports comes
//! from a [`SoilDescriptionParser`], which the server binary wires to a
//! concrete extractor at startup and tests replace with fakes.

use crate::{Outcome, Result};

/// Structured physical properties of a described material.
///
/// Fields the delegate could not determine are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SoilProperties {
    pub moisture: String,
    pub consistency: String,
}

/// Extracts structured data from free-text lithology descriptions.
///
/// The two entry points are independent: implementations must not assume
/// they are called together or in any order, and callers must not assume
/// their results agree with each other.
///
/// Implementations are shared across concurrent calls and must be stateless
/// or internally synchronized.
pub trait SoilDescriptionParser: Send + Sync + 'static {
    /// Extracts moisture and consistency.
    ///
    /// On failure the outcome carries an error together with whatever was
    /// recognized (possibly all-default properties).
    fn parse_properties(&self, description: &str) -> Outcome<SoilProperties>;

    /// Extracts the ordered list of recognized soil terms.
    fn parse_terms(&self, description: &str) -> Result<Vec<String>>;
}
