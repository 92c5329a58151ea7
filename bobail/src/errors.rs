use crate::{Position, Token};

/// The board has no Bobail on it.
///
/// This can only happen for boards that were not produced by this crate's
/// own move generators, e.g. a hand-built or deserialized grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NoBobailFound;

impl std::error::Error for NoBobailFound {}

impl std::fmt::Display for NoBobailFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There is no Bobail on the board")
    }
}

/// The error type for [`BoardState::apply_move()`](crate::BoardState::apply_move).
///
/// The board is never modified when this error is returned.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { pos: Position },
    NoTokenToMove { from: Position },
    NotALegalMove { token: Token, from: Position, to: Position },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { pos } => {
                write!(f, "Position {} is outside of the board", pos)
            }
            IllegalMove::NoTokenToMove { from } => {
                write!(f, "Tried to move from {}, but there is no token to move", from)
            }
            IllegalMove::NotALegalMove { token, from, to } => write!(
                f,
                "Moving the {:?} token from {} to {} is not a legal move",
                token, from, to
            ),
        }
    }
}

/// The error type for [`BoardState::from_rows()`](crate::BoardState::from_rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardFromRowsErr {
    WrongNumberOfRows { found: usize },
    WrongRowLength { row: usize, found: usize },
    InvalidChar { row: usize, col: usize, c: char },
}

impl std::error::Error for BoardFromRowsErr {}

impl std::fmt::Display for BoardFromRowsErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardFromRowsErr::WrongNumberOfRows { found } => {
                write!(f, "Expected 5 rows, got {}", found)
            }
            BoardFromRowsErr::WrongRowLength { row, found } => {
                write!(f, "Row {} has {} cells instead of 5", row, found)
            }
            BoardFromRowsErr::InvalidChar { row, col, c } => write!(
                f,
                "Invalid character '{}' at ({}, {}), expected one of '.', 'R', 'G', 'B'",
                c, row, col
            ),
        }
    }
}
