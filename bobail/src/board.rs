use serde::{Deserialize, Serialize};

use crate::{
    BoardFromRowsErr, IllegalMove, NoBobailFound, Player, Position, Token, BOARD_SIZE, DIRECTIONS,
};

/// The cells of the board, indexed by `[row][col]`.
pub type Grid = [[Token; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// A move of a single token, either the Bobail or a player piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A snapshot of the game: the grid plus the player whose round is in progress.
///
/// A round consists of a Bobail move followed by a move of one of the player's
/// own pieces. Moving the Bobail keeps the turn, moving a piece ends the round
/// and passes the turn to the other player.
///
/// All move generators are pure and return independent copies. The only
/// mutating operation is [`Self::apply_move()`], which validates before it
/// changes anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    grid: Grid,
    turn: Player,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// The starting position: GREEN on row 0, RED on row 4, the Bobail in the
    /// center and RED to move.
    pub fn new() -> Self {
        let mut grid = [[Token::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        grid[0] = [Token::Green; BOARD_SIZE as usize];
        grid[BOARD_SIZE as usize - 1] = [Token::Red; BOARD_SIZE as usize];
        grid[2][2] = Token::Bobail;
        Self {
            grid,
            turn: Player::Red,
        }
    }

    /// Creates a state from an arbitrary grid.
    ///
    /// No invariants are checked, see [`Self::is_well_formed()`].
    pub fn from_grid(grid: Grid, turn: Player) -> Self {
        Self { grid, turn }
    }

    /// Creates a state from five strings of five characters each, using
    /// `.`, `R`, `G` and `B` for empty cells, RED, GREEN and the Bobail.
    pub fn from_rows(rows: &[&str], turn: Player) -> Result<Self, BoardFromRowsErr> {
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardFromRowsErr::WrongNumberOfRows { found: rows.len() });
        }
        let mut grid = [[Token::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (i, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != BOARD_SIZE as usize {
                return Err(BoardFromRowsErr::WrongRowLength { row: i, found });
            }
            for (j, c) in row.chars().enumerate() {
                grid[i][j] =
                    Token::from_char(c).ok_or(BoardFromRowsErr::InvalidChar { row: i, col: j, c })?;
            }
        }
        Ok(Self { grid, turn })
    }

    /// Read-only view of the grid, e.g. for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player whose round is in progress.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns `None` for positions outside of the board.
    pub fn token_at(&self, pos: Position) -> Option<Token> {
        pos.is_on_board().then(|| self.get(pos))
    }

    fn get(&self, pos: Position) -> Token {
        let (i, j) = pos.index();
        self.grid[i][j]
    }

    fn set(&mut self, pos: Position, token: Token) {
        let (i, j) = pos.index();
        self.grid[i][j] = token;
    }

    fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Token::Empty
    }

    /// Checks that there is exactly one Bobail and five pieces per player.
    pub fn is_well_formed(&self) -> bool {
        let count = |token| Position::all().filter(|&pos| self.get(pos) == token).count();
        count(Token::Bobail) == 1 && count(Token::Red) == 5 && count(Token::Green) == 5
    }

    pub fn bobail_position(&self) -> Result<Position, NoBobailFound> {
        Position::all()
            .find(|&pos| self.get(pos) == Token::Bobail)
            .ok_or(NoBobailFound)
    }

    /// The empty cells among the (up to) eight neighbours of `pos`.
    pub fn empty_neighbors(&self, pos: Position) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| pos.offset(dir))
            .filter(|&neighbor| self.is_empty_at(neighbor))
            .collect()
    }

    /// All cells holding the given token, in row-major order.
    pub fn piece_positions(&self, token: Token) -> Vec<Position> {
        Position::all().filter(|&pos| self.get(pos) == token).collect()
    }

    /// A copy of this state with the given cell cleared.
    pub fn without_piece_at(&self, pos: Position) -> BoardState {
        let mut next = *self;
        next.set(pos, Token::Empty);
        next
    }

    pub fn next_player(&self) -> Player {
        self.turn.other()
    }

    pub fn advance_turn(&mut self) {
        self.turn = self.next_player();
    }

    /// All states reachable by moving the Bobail one step, each with the move
    /// that produces it.
    pub fn bobail_moves_with_origin(&self) -> Result<Vec<(Move, BoardState)>, NoBobailFound> {
        Ok(self.bobail_moves_from(self.bobail_position()?))
    }

    fn bobail_moves_from(&self, from: Position) -> Vec<(Move, BoardState)> {
        let without_bobail = self.without_piece_at(from);
        self.empty_neighbors(from)
            .into_iter()
            .map(|to| {
                let mut next = without_bobail;
                next.set(to, Token::Bobail);
                (Move { from, to }, next)
            })
            .collect()
    }

    /// All states reachable by moving the Bobail one step. The turn is unchanged.
    pub fn bobail_moves(&self) -> Result<Vec<BoardState>, NoBobailFound> {
        Ok(self
            .bobail_moves_with_origin()?
            .into_iter()
            .map(|(_, state)| state)
            .collect())
    }

    /// The last empty cell reached by sliding from `from` in direction `dir`,
    /// or `None` if the very first step is blocked.
    pub fn furthest_empty_position(&self, from: Position, dir: (i8, i8)) -> Option<Position> {
        let mut furthest = None;
        let mut cursor = from;
        while let Some(next) = cursor.offset(dir).filter(|&p| self.is_empty_at(p)) {
            furthest = Some(next);
            cursor = next;
        }
        furthest
    }

    /// All states reachable by sliding the piece at `from`, one per unblocked
    /// direction. The turn passes to the other player.
    ///
    /// Panics if `from` is not on the board.
    pub fn piece_moves_from(&self, from: Position) -> Vec<(Move, BoardState)> {
        let token = self.get(from);
        let mut without_piece = self.without_piece_at(from);
        without_piece.advance_turn();

        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.furthest_empty_position(from, dir))
            .map(|to| {
                let mut next = without_piece;
                next.set(to, token);
                (Move { from, to }, next)
            })
            .collect()
    }

    /// All states reachable by sliding any piece of the player to move, each
    /// with the move that produces it.
    pub fn piece_moves_with_origin(&self) -> Vec<(Move, BoardState)> {
        self.piece_positions(self.turn.token())
            .into_iter()
            .flat_map(|from| self.piece_moves_from(from))
            .collect()
    }

    /// All states reachable by sliding any piece of the player to move.
    pub fn piece_moves(&self) -> Vec<BoardState> {
        self.piece_moves_with_origin()
            .into_iter()
            .map(|(_, state)| state)
            .collect()
    }

    /// Moves the token at `from` to `to`, if that is a legal move in this state.
    ///
    /// Moving the Bobail keeps the turn, moving a piece of the player to move
    /// passes it. On error, `self` is left untouched.
    pub fn apply_move(&mut self, from: Position, to: Position) -> Result<(), IllegalMove> {
        for pos in [from, to] {
            if !pos.is_on_board() {
                return Err(IllegalMove::OutOfBounds { pos });
            }
        }

        let token = self.get(from);
        let legal_moves = match token {
            Token::Red | Token::Green => self.piece_moves_with_origin(),
            Token::Bobail => self.bobail_moves_from(from),
            Token::Empty => return Err(IllegalMove::NoTokenToMove { from }),
        };

        let mv = Move { from, to };
        match legal_moves.into_iter().find(|&(legal, _)| legal == mv) {
            Some((_, next)) => {
                *self = next;
                Ok(())
            }
            None => Err(IllegalMove::NotALegalMove { token, from, to }),
        }
    }

    /// Returns the winner, or `None` if the game goes on.
    ///
    /// The Bobail on row 0 is a win for GREEN, on the last row a win for RED.
    /// A Bobail without empty neighbours is a win for the player who would
    /// move next.
    pub fn game_outcome(&self) -> Result<Option<Player>, NoBobailFound> {
        let pos = self.bobail_position()?;
        if pos.row == 0 {
            return Ok(Some(Player::Green));
        }
        if pos.row == BOARD_SIZE - 1 {
            return Ok(Some(Player::Red));
        }
        if self.empty_neighbors(pos).is_empty() {
            return Ok(Some(self.next_player()));
        }
        Ok(None)
    }
}

/// Shorthand for creating a [`BoardState`] from row strings.
///
/// This macro is just calling [`BoardState::from_rows()`].
/// ```
/// # use bobail::{board, BoardState, Player};
/// let state = board!(Player::Red;
///     "GGGGG",
///     ".....",
///     "..B..",
///     ".....",
///     "RRRRR",
/// );
/// assert_eq!(state, BoardState::new());
/// ```
#[macro_export]
macro_rules! board {
    ($turn:expr; $($row:literal),+ $(,)?) => {
        $crate::BoardState::from_rows(&[$($row),+], $turn)
            .expect("Invalid rows given to board! macro")
    };
}
