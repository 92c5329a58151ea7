use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use bobail::{best_composite_move_for, best_composite_move_par, composite_moves, BoardState, CompositeMove};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How a player picks its moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Strategy {
    /// A uniformly random complete round.
    Random,
    /// The round that wins the most random playouts for the player to move.
    MonteCarlo {
        /// Playouts per candidate round.
        samples: usize,
        /// Score the candidates on all cores.
        #[serde(default)]
        parallel: bool,
    },
}

/// The contents of a player config JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub nick: String,
    pub strategy: Strategy,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open player config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid player config '{}'", path.display()))
    }
}

pub struct Player {
    pub name: String,
    strategy: Strategy,
}

impl Player {
    pub fn new(name: &str, strategy: Strategy) -> Self {
        Self {
            name: String::from(name),
            strategy,
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(&config.nick, config.strategy.clone())
    }

    /// Picks the next round for the player to move.
    ///
    /// Returns `None` only if there is no complete round, i.e. no Bobail move
    /// after which one of the player's pieces can move.
    pub fn choose_move(
        &self,
        state: &BoardState,
        rng: &mut StdRng,
    ) -> anyhow::Result<Option<CompositeMove>> {
        if let Strategy::MonteCarlo { samples, parallel } = self.strategy {
            let best = if parallel {
                best_composite_move_par(state, state.turn(), samples, rng)?
            } else {
                best_composite_move_for(state, state.turn(), samples, rng)?
            };
            if let Some(scored) = best {
                trace!(player = &self.name, score = scored.score, samples, "Chose scored move");
                return Ok(Some(scored.mv));
            }
            debug!(player = &self.name, "No candidate won a playout, moving randomly");
        }
        Ok(composite_moves(state)?.choose(rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use bobail::Player as Color;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn parse_configs() {
        let random: PlayerConfig =
            serde_json::from_str(r#"{"nick": "rnd", "strategy": {"type": "random"}}"#).unwrap();
        assert_eq!(random.strategy, Strategy::Random);

        let mc: PlayerConfig = serde_json::from_str(
            r#"{"nick": "mc", "strategy": {"type": "monte_carlo", "samples": 20}}"#,
        )
        .unwrap();
        assert_eq!(
            mc.strategy,
            Strategy::MonteCarlo {
                samples: 20,
                parallel: false
            }
        );
    }

    #[test]
    fn load_missing_config() {
        let err = PlayerConfig::load(Path::new("/does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("/does/not/exist.json"));
    }

    #[test]
    fn chosen_moves_are_complete_rounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = BoardState::new();
        let candidates = composite_moves(&state).unwrap();
        for strategy in [
            Strategy::Random,
            Strategy::MonteCarlo {
                samples: 0,
                parallel: false,
            },
            Strategy::MonteCarlo {
                samples: 1,
                parallel: true,
            },
        ] {
            let player = Player::new("p", strategy);
            let mv = player.choose_move(&state, &mut rng).unwrap().unwrap();
            assert!(candidates.contains(&mv));
            assert_eq!(mv.state.turn(), Color::Green);
        }
    }
}
