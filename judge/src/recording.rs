use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use bobail::{Move, Player as Color};
use serde::{Deserialize, Serialize};

/// Writes one JSON file per game into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    current: GameRecording,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            current: GameRecording::default(),
        })
    }

    pub fn start_game(&mut self, players: [(&str, Color); 2]) {
        self.current = GameRecording {
            players: players
                .into_iter()
                .map(|(nick, color)| RecordedPlayer {
                    nick: String::from(nick),
                    color,
                })
                .collect(),
            ..GameRecording::default()
        };
    }

    pub fn store_round(&mut self, color: Color, bobail: Move, piece: Move) {
        self.current.rounds.push(RecordedRound {
            color,
            bobail,
            piece,
        });
    }

    /// Writes the current game to `game_<num>.json` and returns its path.
    pub fn write_game_recording(&mut self, winner: Option<Color>) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut recording = std::mem::take(&mut self.current);
        recording.winner = winner;
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub players: Vec<RecordedPlayer>,
    pub rounds: Vec<RecordedRound>,
    /// `None` if the game was stopped before it was decided.
    pub winner: Option<Color>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedPlayer {
    pub nick: String,
    pub color: Color,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRound {
    pub color: Color,
    pub bobail: Move,
    pub piece: Move,
}
