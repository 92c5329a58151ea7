use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::{BoardState, NoBobailFound, Player};

/// The end of a random game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playout {
    /// The state in which the game was decided.
    pub state: BoardState,
    pub winner: Player,
    /// How many complete rounds were played.
    pub rounds: usize,
}

/// Plays uniformly random rounds from `state` until the game is decided.
///
/// Every round picks a random Bobail move and then a random piece move of the
/// player to move. A player who cannot move any piece after moving the Bobail
/// loses (unless that Bobail move already decided the game), and the playout
/// ends in that state.
///
/// This is not guaranteed to finish within a fixed number of rounds, but it
/// does in practice.
pub fn play_random_to_end<R: Rng + ?Sized>(
    state: &BoardState,
    rng: &mut R,
) -> Result<Playout, NoBobailFound> {
    let mut state = *state;
    let mut rounds = 0;
    loop {
        if let Some(winner) = state.game_outcome()? {
            return Ok(Playout {
                state,
                winner,
                rounds,
            });
        }
        // The Bobail has an empty neighbour, otherwise the game would be decided
        let Some(&bobail_moved) = state.bobail_moves()?.choose(rng) else {
            unreachable!("Undecided game without any Bobail move");
        };
        match bobail_moved.piece_moves().choose(rng) {
            Some(&next) => state = next,
            None => {
                trace!(rounds, player = %bobail_moved.turn(), "No piece can move");
                let winner = bobail_moved
                    .game_outcome()?
                    .unwrap_or(bobail_moved.next_player());
                return Ok(Playout {
                    state: bobail_moved,
                    winner,
                    rounds,
                });
            }
        }
        rounds += 1;
    }
}
