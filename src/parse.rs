//! Token grammar for the command line.
//!
//! Arguments come as `WIDTH HEIGHT POS CMDS [POS CMDS ...]`, where a position
//! looks like `(2,3,E)` and a command string is made of `F`, `L` and `R`.
//! The first bad token fails the whole parse.

use crate::error::{ParseError, ParseResult};
use crate::movement::GridDimensions;
use crate::rover::{Command, Orientation, Position, RoverSpec};
use crate::simulation::Mission;

/// Parses a position token such as `(2,3,E)` or `(2, 3, N)`.
pub fn parse_position(token: &str) -> ParseResult<Position> {
    let inner: String = token.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    let mut fields = inner.split(',').map(str::trim);

    let x = fields.next().unwrap_or_default();
    let y = fields.next().unwrap_or_default();
    let heading = fields.next().unwrap_or_default();

    let mut chars = heading.chars();
    let orientation = match (chars.next(), chars.next()) {
        (Some(c), None) => Orientation::from_char(c),
        _ => None,
    }
    .ok_or_else(|| ParseError::InvalidOrientation(heading.to_string()))?;

    let coord = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidCoordinate(token.to_string()))
    };

    Ok(Position::new(coord(x)?, coord(y)?, orientation))
}

/// Parses a command string such as `LFRFF`. The empty string is an empty sequence.
pub fn parse_commands(token: &str) -> ParseResult<Vec<Command>> {
    token
        .chars()
        .map(Command::from_char)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ParseError::InvalidCommands(token.to_string()))
}

fn parse_grid(width: Option<&str>, height: Option<&str>) -> ParseResult<GridDimensions> {
    let (Some(width), Some(height)) = (width, height) else {
        return Err(ParseError::MissingGridDimensions);
    };
    if width.is_empty() || height.is_empty() {
        return Err(ParseError::MissingGridDimensions);
    }

    match (width.trim().parse::<u32>(), height.trim().parse::<u32>()) {
        (Ok(w), Ok(h)) => Ok(GridDimensions::new(w, h)),
        _ => Err(ParseError::invalid_grid(width, height)),
    }
}

/// Parses the full argument list (program name excluded) into a [`Mission`].
pub fn parse_arguments<S: AsRef<str>>(args: &[S]) -> ParseResult<Mission> {
    let grid = parse_grid(
        args.first().map(AsRef::as_ref),
        args.get(1).map(AsRef::as_ref),
    )?;

    let rover_tokens = &args[2..];
    if rover_tokens.is_empty() {
        return Err(ParseError::MissingRovers);
    }
    if rover_tokens.len() % 2 != 0 {
        return Err(ParseError::IncompleteRoverSpec);
    }

    let rovers = rover_tokens
        .chunks_exact(2)
        .map(|pair| -> ParseResult<RoverSpec> {
            Ok(RoverSpec::new(
                parse_position(pair[0].as_ref())?,
                parse_commands(pair[1].as_ref())?,
            ))
        })
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(Mission::new(grid, rovers))
}
