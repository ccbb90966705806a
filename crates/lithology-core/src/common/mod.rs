pub mod delegate;
pub mod error;
pub mod outcome;
pub mod types;

pub use delegate::{SoilDescriptionParser, SoilProperties};
pub use error::{Error, Result};
pub use outcome::Outcome;
