use serde::{Deserialize, Serialize};

/// The content of a single cell of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Empty,
    Red,
    Green,
    /// The neutral piece shared by both players.
    Bobail,
}

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Starts on the bottom row and moves first.
    Red,
    /// Starts on the top row.
    Green,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Green,
            Player::Green => Player::Red,
        }
    }

    /// The token type of this player's own pieces.
    pub fn token(self) -> Token {
        match self {
            Player::Red => Token::Red,
            Player::Green => Token::Green,
        }
    }
}

impl Token {
    pub fn to_char(self) -> char {
        match self {
            Token::Empty => '.',
            Token::Red => 'R',
            Token::Green => 'G',
            Token::Bobail => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Token> {
        match c {
            '.' => Some(Token::Empty),
            'R' => Some(Token::Red),
            'G' => Some(Token::Green),
            'B' => Some(Token::Bobail),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "red"),
            Player::Green => write!(f, "green"),
        }
    }
}
