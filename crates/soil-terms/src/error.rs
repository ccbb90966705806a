use crate::SoilDescription;

/// Reasons a description could not be fully parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The description was empty or contained only whitespace/punctuation.
    #[error("description is empty")]
    EmptyDescription,

    /// No soil term was recognized. Any moisture or consistency that was
    /// recognized is still reported in `partial`.
    #[error("no primary soil term found in description")]
    NoPrimarySoil { partial: SoilDescription },
}

impl ParseError {
    /// Returns the properties recognized before parsing gave up.
    ///
    /// Empty descriptions yield an all-default [`SoilDescription`].
    pub fn into_partial(self) -> SoilDescription {
        match self {
            Self::EmptyDescription => SoilDescription::default(),
            Self::NoPrimarySoil { partial } => partial,
        }
    }
}
