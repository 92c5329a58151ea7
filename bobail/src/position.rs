use serde::{Deserialize, Serialize};

/// The board is `BOARD_SIZE` x `BOARD_SIZE` cells.
pub const BOARD_SIZE: i8 = 5;

/// The eight king/queen directions as `(row, col)` deltas.
///
/// The order here determines the order in which successor states are generated.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell on the board. Row 0 is GREEN's home row, row 4 is RED's.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// The neighbouring position in the given direction, if it is still on the board.
    pub fn offset(self, (d_row, d_col): (i8, i8)) -> Option<Position> {
        let pos = Position::new(self.row.checked_add(d_row)?, self.col.checked_add(d_col)?);
        pos.is_on_board().then_some(pos)
    }

    /// All positions of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    // Only valid for on-board positions.
    pub(crate) fn index(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Position::new(0, 0).offset((-1, 0)), None);
        assert_eq!(Position::new(0, 0).offset((0, -1)), None);
        assert_eq!(Position::new(4, 4).offset((1, 1)), None);
        assert_eq!(
            Position::new(2, 2).offset((1, -1)),
            Some(Position::new(3, 1))
        );
    }

    #[test]
    fn all_positions_are_row_major() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 25);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[5], Position::new(1, 0));
        assert_eq!(all[24], Position::new(4, 4));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
