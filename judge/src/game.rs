use anyhow::Context;
use bobail::{BoardState, Player as Color, BOARD_SIZE};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::player::Player;
use crate::recording::Recorder;

/// Why a game ended with a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinReason {
    /// The Bobail reached the winner's home row.
    HomeRow,
    /// The Bobail was surrounded when the loser had to move it.
    BobailTrapped,
    /// No Bobail move of the loser left one of its pieces able to slide.
    NoLegalRound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won {
        player_idx: usize,
        color: Color,
        reason: WinReason,
    },
    /// The round limit was reached before the game was decided.
    Tie,
}

/// Plays one game from the starting position and reports who won.
///
/// Colors are assigned randomly, and RED always starts. Returns an error if a
/// player fails to compute its move, if a chosen round is rejected by the
/// board, or if the recording cannot be written.
pub fn play_game(
    rng: &mut StdRng,
    player_1: &Player,
    player_2: &Player,
    max_rounds: usize,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    play_game_from(BoardState::new(), rng, [player_1, player_2], max_rounds, recorder)
}

fn play_game_from(
    mut state: BoardState,
    rng: &mut StdRng,
    players: [&Player; 2],
    max_rounds: usize,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    let mut colors = [Color::Red, Color::Green];
    colors.shuffle(rng);
    let player_idx_of = |color: Color| if colors[0] == color { 0 } else { 1 };

    if let Some(rec) = recorder {
        rec.start_game([
            (players[0].name.as_str(), colors[0]),
            (players[1].name.as_str(), colors[1]),
        ]);
    }

    let mut rounds = 0;
    let outcome = loop {
        if let Some(winner) = state.game_outcome()? {
            let bobail_row = state.bobail_position()?.row;
            let reason = if bobail_row == 0 || bobail_row == BOARD_SIZE - 1 {
                WinReason::HomeRow
            } else {
                WinReason::BobailTrapped
            };
            break Some((winner, reason));
        }
        if rounds >= max_rounds {
            break None;
        }

        let color = state.turn();
        let player = players[player_idx_of(color)];
        let Some(mv) = player.choose_move(&state, rng)? else {
            break Some((color.other(), WinReason::NoLegalRound));
        };

        state
            .apply_move(mv.bobail.from, mv.bobail.to)
            .and_then(|()| state.apply_move(mv.piece.from, mv.piece.to))
            .with_context(|| {
                format!("{} chose a round the board rejected: {} then {}", player.name, mv.bobail, mv.piece)
            })?;
        trace!(player = &player.name, bobail = %mv.bobail, piece = %mv.piece, "\n{}", state);

        if let Some(rec) = recorder {
            rec.store_round(color, mv.bobail, mv.piece);
        }
        rounds += 1;
    };

    let result = match outcome {
        Some((color, reason)) => {
            debug!(winner = %color, ?reason, rounds, "Game decided");
            GameResult::Won {
                player_idx: player_idx_of(color),
                color,
                reason,
            }
        }
        None => {
            debug!(rounds, "Round limit reached");
            GameResult::Tie
        }
    };

    if let Some(rec) = recorder {
        let path = rec.write_game_recording(outcome.map(|(color, _)| color))?;
        debug!(path = %path.display(), "Recorded game");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use bobail::board;
    use rand::SeedableRng;

    use super::*;
    use crate::{GameRecording, Strategy};

    fn random_player(name: &str) -> Player {
        Player::new(name, Strategy::Random)
    }

    #[test]
    fn random_players_finish_games() {
        let mut rng = StdRng::seed_from_u64(11);
        let player_1 = random_player("a");
        let player_2 = random_player("b");
        for _ in 0..10 {
            if let GameResult::Won { player_idx, .. } =
                play_game(&mut rng, &player_1, &player_2, 500, &mut None).unwrap()
            {
                assert!(player_idx < 2);
            }
        }
    }

    #[test]
    fn zero_rounds_is_a_tie() {
        let mut rng = StdRng::seed_from_u64(0);
        let player = random_player("a");
        assert_eq!(
            play_game(&mut rng, &player, &player, 0, &mut None).unwrap(),
            GameResult::Tie
        );
    }

    #[test]
    fn immobilised_player_loses_without_a_legal_round() {
        let state = board!(Color::Red;
            "RRRRR",
            "GGGGG",
            ".....",
            "..B..",
            ".....",
        );
        let players = [random_player("a"), random_player("b")];
        let mut rng = StdRng::seed_from_u64(4);
        let GameResult::Won {
            player_idx,
            color,
            reason,
        } = play_game_from(state, &mut rng, [&players[0], &players[1]], 10, &mut None).unwrap()
        else {
            panic!("expected a winner");
        };
        assert_eq!(color, Color::Green);
        assert_eq!(reason, WinReason::NoLegalRound);
        assert!(player_idx < 2);
    }

    #[test]
    fn win_reasons_follow_the_bobail() {
        let players = [random_player("a"), random_player("b")];
        let mut rng = StdRng::seed_from_u64(9);

        let home_row = board!(Color::Green;
            "GGGGG",
            ".....",
            "..R..",
            ".....",
            "RRBRR",
        );
        let result =
            play_game_from(home_row, &mut rng, [&players[0], &players[1]], 10, &mut None).unwrap();
        assert!(matches!(
            result,
            GameResult::Won {
                color: Color::Red,
                reason: WinReason::HomeRow,
                ..
            }
        ));

        // Surrounded with GREEN to move, so RED gets the win
        let trapped = board!(Color::Green;
            "RGG..",
            "GBG..",
            "RRR..",
            "....G",
            "....R",
        );
        let result =
            play_game_from(trapped, &mut rng, [&players[0], &players[1]], 10, &mut None).unwrap();
        assert!(matches!(
            result,
            GameResult::Won {
                color: Color::Red,
                reason: WinReason::BobailTrapped,
                ..
            }
        ));
    }

    #[test]
    fn recorded_game_replays() {
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = Some(Recorder::new(dir.path().to_path_buf()).unwrap());
        let mut rng = StdRng::seed_from_u64(3);
        let player_1 = random_player("a");
        let player_2 = Player::new(
            "b",
            Strategy::MonteCarlo {
                samples: 1,
                parallel: false,
            },
        );
        let result = play_game(&mut rng, &player_1, &player_2, 50, &mut recorder).unwrap();

        let file = std::fs::File::open(dir.path().join("game_000001.json")).unwrap();
        let recording: GameRecording = serde_json::from_reader(file).unwrap();
        assert_eq!(recording.players.len(), 2);
        assert_ne!(recording.players[0].color, recording.players[1].color);

        let mut state = BoardState::new();
        for round in &recording.rounds {
            assert_eq!(round.color, state.turn());
            state.apply_move(round.bobail.from, round.bobail.to).unwrap();
            state.apply_move(round.piece.from, round.piece.to).unwrap();
        }
        match result {
            GameResult::Won {
                player_idx, color, ..
            } => {
                assert_eq!(recording.winner, Some(color));
                assert_eq!(recording.players[player_idx].color, color);
            }
            GameResult::Tie => assert_eq!(recording.winner, None),
        }
    }

    #[test]
    fn recorder_needs_a_directory() {
        assert!(Recorder::new("/does/not/exist".into()).is_err());
    }
}
