use thiserror::Error;

/// Result alias for argument parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while turning command-line tokens into a [`Mission`](crate::Mission).
///
/// Any of these aborts the whole run before a single rover moves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid orientation: {0}")]
    InvalidOrientation(String),
    #[error("Invalid commands: {0}")]
    InvalidCommands(String),
    #[error("Invalid coordinates in position: {0}")]
    InvalidCoordinate(String),
    #[error("Grid dimensions are required")]
    MissingGridDimensions,
    #[error("Grid dimensions must be valid numbers (got {width:?} x {height:?})")]
    InvalidGridDimensions { width: String, height: String },
    #[error("Rover commands are required")]
    MissingRovers,
    #[error("Each rover must have both a position and commands")]
    IncompleteRoverSpec,
}

impl ParseError {
    pub(crate) fn invalid_grid(width: impl Into<String>, height: impl Into<String>) -> Self {
        ParseError::InvalidGridDimensions {
            width: width.into(),
            height: height.into(),
        }
    }
}
