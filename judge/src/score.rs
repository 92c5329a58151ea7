use std::collections::HashMap;

use bobail::Player as Color;
use itertools::Itertools;

use crate::game::{GameResult, WinReason};

/// The tally of all games between two players, indexed like `play_game`'s players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub wins: [usize; 2],
    pub wins_as_red: [usize; 2],
    /// Losses because the player had no legal round.
    pub stuck: [usize; 2],
    pub ties: usize,
}

impl MatchScore {
    pub fn record(&mut self, result: &GameResult) {
        match *result {
            GameResult::Won {
                player_idx,
                color,
                reason,
            } => {
                self.wins[player_idx] += 1;
                if color == Color::Red {
                    self.wins_as_red[player_idx] += 1;
                }
                if reason == WinReason::NoLegalRound {
                    self.stuck[1 - player_idx] += 1;
                }
            }
            GameResult::Tie => self.ties += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.ties
    }

    /// One line per player, then the ties.
    pub fn summary(&self, names: [&str; 2]) -> String {
        let mut lines = Vec::with_capacity(3);
        for idx in 0..2 {
            let mut line = format!(
                "{}: {} wins ({} as red, {} as green)",
                names[idx],
                self.wins[idx],
                self.wins_as_red[idx],
                self.wins[idx] - self.wins_as_red[idx],
            );
            if self.stuck[idx] > 0 {
                line.push_str(&format!(", lost {} with no legal round", self.stuck[idx]));
            }
            lines.push(line);
        }
        lines.push(format!("ties at the round limit: {}", self.ties));
        lines.join("\n")
    }
}

/// A player's totals over all its matchups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub nick: String,
    pub wins: usize,
    pub ties: usize,
    pub games: usize,
}

/// Sums up the matchups per player, most wins first.
///
/// Equal win counts keep the order of `nicks`.
pub fn standings(nicks: &[&str], results: &HashMap<(usize, usize), MatchScore>) -> Vec<Standing> {
    let mut standings: Vec<Standing> = nicks
        .iter()
        .map(|nick| Standing {
            nick: nick.to_string(),
            wins: 0,
            ties: 0,
            games: 0,
        })
        .collect();
    for (&(i1, i2), score) in results {
        for (idx, player) in [(0, i1), (1, i2)] {
            standings[player].wins += score.wins[idx];
            standings[player].ties += score.ties;
            standings[player].games += score.games();
        }
    }
    standings
        .into_iter()
        .sorted_by(|a, b| b.wins.cmp(&a.wins))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won(player_idx: usize, color: Color, reason: WinReason) -> GameResult {
        GameResult::Won {
            player_idx,
            color,
            reason,
        }
    }

    #[test]
    fn record_game_results() {
        let mut score = MatchScore::default();
        score.record(&won(0, Color::Red, WinReason::HomeRow));
        score.record(&won(0, Color::Green, WinReason::NoLegalRound));
        score.record(&won(1, Color::Red, WinReason::BobailTrapped));
        score.record(&GameResult::Tie);

        assert_eq!(
            score,
            MatchScore {
                wins: [2, 1],
                wins_as_red: [1, 1],
                stuck: [0, 1],
                ties: 1,
            }
        );
        assert_eq!(score.games(), 4);
        assert_eq!(
            score.summary(["mc", "rnd"]),
            "mc: 2 wins (1 as red, 1 as green)\n\
             rnd: 1 wins (1 as red, 0 as green), lost 1 with no legal round\n\
             ties at the round limit: 1"
        );
    }

    #[test]
    fn standings_sum_all_matchups() {
        let mut results = HashMap::new();
        results.insert(
            (0, 1),
            MatchScore {
                wins: [1, 3],
                ties: 1,
                ..MatchScore::default()
            },
        );
        results.insert(
            (0, 2),
            MatchScore {
                wins: [2, 2],
                ..MatchScore::default()
            },
        );
        results.insert(
            (1, 2),
            MatchScore {
                wins: [0, 4],
                ..MatchScore::default()
            },
        );

        let table = standings(&["a", "b", "c"], &results);
        let summary: Vec<(&str, usize, usize, usize)> = table
            .iter()
            .map(|s| (s.nick.as_str(), s.wins, s.ties, s.games))
            .collect();
        assert_eq!(
            summary,
            vec![("c", 6, 0, 8), ("a", 3, 1, 9), ("b", 3, 1, 9)]
        );
    }
}
