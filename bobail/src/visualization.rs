use crate::{BoardState, BOARD_SIZE};

/// Draws the grid in a box, with row and column indices.
///
/// This is meant for logs and debugging output.
pub fn visualize_board(state: &BoardState) -> String {
    let mut result = String::from("    ");
    for j in 0..BOARD_SIZE {
        result += &format!("{:>2}", j);
    }
    result += "\n    ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╮\n";
    for (i, row) in state.grid().iter().enumerate() {
        result += &format!("{:>3} │", i);
        for token in row {
            result += &format!(" {}", token);
        }
        result += " │\n";
    }
    result += "    ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += &format!("─╯\n    {} to move", state.turn());
    result
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position() {
        let expected = "     0 1 2 3 4
    ╭───────────╮
  0 │ G G G G G │
  1 │ . . . . . │
  2 │ . . B . . │
  3 │ . . . . . │
  4 │ R R R R R │
    ╰───────────╯
    red to move";
        assert_eq!(BoardState::new().to_string(), expected);
    }
}
