// third-party imports
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error is an error which may occur when compiling a pattern.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A `*` at the given character position has no atom to repeat.
    #[error("malformed pattern: '*' at position {position} has no preceding atom")]
    MalformedPattern { position: usize },
}

impl Error {
    /// Character position in the pattern the error refers to.
    pub fn position(&self) -> usize {
        match self {
            Self::MalformedPattern { position } => *position,
        }
    }
}
