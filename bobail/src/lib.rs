//! Rules and a Monte-Carlo move selector for the board game Bobail.
//!
//! Two players, RED and GREEN, each own five pieces on a 5x5 board and share
//! a neutral piece, the Bobail. A round consists of moving the Bobail one step
//! and then sliding one of the player's own pieces as far as it goes. The
//! Bobail reaching a home row, or being unable to move, decides the game.
//!
//! ```
//! use bobail::{best_composite_move, BoardState, Player};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut state = BoardState::new();
//! let mut rng = StdRng::seed_from_u64(0);
//! if let Some(best) = best_composite_move(&state, 2, &mut rng).unwrap() {
//!     state.apply_move(best.mv.bobail.from, best.mv.bobail.to).unwrap();
//!     state.apply_move(best.mv.piece.from, best.mv.piece.to).unwrap();
//!     assert_eq!(state.turn(), Player::Green);
//! }
//! ```
pub use board::*;
pub use errors::*;
pub use evaluator::*;
pub use playout::*;
pub use position::*;
pub use tokens::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod evaluator;
mod playout;
mod position;
mod tokens;
mod visualization;
