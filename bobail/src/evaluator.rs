use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{play_random_to_end, BoardState, Move, NoBobailFound, Player};

/// A complete round: a Bobail move followed by a piece move of the same player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeMove {
    pub bobail: Move,
    pub piece: Move,
    /// The state after both moves, with the turn passed to the other player.
    pub state: BoardState,
}

/// A [`CompositeMove`] together with the number of random playouts it won.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: CompositeMove,
    pub score: usize,
}

/// Every Bobail move combined with every piece move that can follow it.
///
/// The order is that of [`BoardState::bobail_moves()`], and for each of those
/// that of [`BoardState::piece_moves()`].
pub fn composite_moves(state: &BoardState) -> Result<Vec<CompositeMove>, NoBobailFound> {
    Ok(state
        .bobail_moves_with_origin()?
        .into_iter()
        .flat_map(|(bobail, bobail_moved)| {
            bobail_moved
                .piece_moves_with_origin()
                .into_iter()
                .map(move |(piece, state)| CompositeMove {
                    bobail,
                    piece,
                    state,
                })
        })
        .collect())
}

/// Counts how many of `samples` random playouts from `state` are won by `player`.
pub fn score_state<R: Rng + ?Sized>(
    state: &BoardState,
    player: Player,
    samples: usize,
    rng: &mut R,
) -> Result<usize, NoBobailFound> {
    let mut score = 0;
    for _ in 0..samples {
        if play_random_to_end(state, rng)?.winner == player {
            score += 1;
        }
    }
    Ok(score)
}

/// Picks the composite move whose resulting state wins the most random
/// playouts for RED.
///
/// Returns `None` if no candidate wins a single playout, which is always the
/// case for `samples == 0`. See [`best_composite_move_for()`].
pub fn best_composite_move<R: Rng + ?Sized>(
    state: &BoardState,
    samples: usize,
    rng: &mut R,
) -> Result<Option<ScoredMove>, NoBobailFound> {
    best_composite_move_for(state, Player::Red, samples, rng)
}

/// Picks the composite move whose resulting state wins the most random
/// playouts for `player`, running `samples` playouts per candidate.
///
/// Among equally good candidates, the first one in the order of
/// [`composite_moves()`] is returned. A candidate must win at least one
/// playout to be returned at all.
pub fn best_composite_move_for<R: Rng + ?Sized>(
    state: &BoardState,
    player: Player,
    samples: usize,
    rng: &mut R,
) -> Result<Option<ScoredMove>, NoBobailFound> {
    let candidates = composite_moves(state)?;
    let scores = candidates
        .iter()
        .map(|candidate| score_state(&candidate.state, player, samples, rng))
        .collect::<Result<Vec<usize>, NoBobailFound>>()?;
    Ok(select_best(&candidates, &scores))
}

/// Like [`best_composite_move_for()`], but scores the candidates in parallel.
///
/// Each candidate gets its own generator seeded from `rng`, so the result only
/// depends on the state of `rng`, not on the thread scheduling.
pub fn best_composite_move_par<R: Rng + ?Sized>(
    state: &BoardState,
    player: Player,
    samples: usize,
    rng: &mut R,
) -> Result<Option<ScoredMove>, NoBobailFound> {
    let candidates = composite_moves(state)?;
    let seeds: Vec<u64> = candidates.iter().map(|_| rng.gen()).collect();
    let scores = candidates
        .par_iter()
        .zip(seeds)
        .map(|(candidate, seed)| {
            let mut candidate_rng = StdRng::seed_from_u64(seed);
            score_state(&candidate.state, player, samples, &mut candidate_rng)
        })
        .collect::<Result<Vec<usize>, NoBobailFound>>()?;
    Ok(select_best(&candidates, &scores))
}

// Strictly greater than the best so far, starting from zero.
fn select_best(candidates: &[CompositeMove], scores: &[usize]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    let mut best_score = 0;
    for (&mv, &score) in candidates.iter().zip(scores) {
        if score > best_score {
            best_score = score;
            best = Some(ScoredMove { mv, score });
            debug!(bobail = %mv.bobail, piece = %mv.piece, score, "New best composite move");
        }
    }
    best
}
