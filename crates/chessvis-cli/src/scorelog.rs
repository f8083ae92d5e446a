use anyhow::{Context, Result};
use chessvis_core::Challenge;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// One answered round, as appended to the score log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number within its session, starting at 1
    pub round: u32,
    /// Game variant name
    pub game: String,
    /// The dealt challenge, in display form
    pub challenge: String,
    /// The submitted answer, as typed
    pub answer: String,
    pub correct: bool,
    /// Seconds from prompt to graded answer
    pub time_secs: f64,
    /// Unix timestamp when the round was answered
    pub timestamp: u64,
}

impl RoundRecord {
    pub fn new(
        round: u32,
        game: &str,
        challenge: &Challenge,
        answer: &str,
        correct: bool,
        time_secs: f64,
    ) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            round,
            game: game.to_string(),
            challenge: challenge.to_string(),
            answer: answer.to_string(),
            correct,
            time_secs,
            timestamp,
        }
    }
}

/// Append-only score log: one JSON record per line.
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(Self::default_path),
        }
    }

    fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chess_trainer_scores.jsonl")
    }

    pub fn append(&self, record: &RoundRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening score log {}", self.path.display()))?;
        let json = serde_json::to_string(record)?;
        writeln!(file, "{json}")?;
        Ok(())
    }

    /// All records currently in the log. A missing file reads as empty.
    pub fn load(&self) -> Result<Vec<RoundRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading score log {}", self.path.display()))
            }
        };
        let mut records = Vec::new();
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            records.push(
                serde_json::from_str(line)
                    .with_context(|| format!("parsing score log {}", self.path.display()))?,
            );
        }
        Ok(records)
    }
}

/// Accuracy and timing aggregates for one game variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameStats {
    pub rounds: usize,
    pub correct: usize,
    pub total_time_secs: f64,
}

impl GameStats {
    pub fn accuracy(&self) -> f64 {
        if self.rounds > 0 {
            self.correct as f64 / self.rounds as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn avg_time_secs(&self) -> f64 {
        if self.rounds > 0 {
            self.total_time_secs / self.rounds as f64
        } else {
            0.0
        }
    }
}

/// Aggregate records per game variant, keyed by game name.
pub fn aggregate(records: &[RoundRecord]) -> BTreeMap<String, GameStats> {
    let mut by_game: BTreeMap<String, GameStats> = BTreeMap::new();
    for record in records {
        let stats = by_game.entry(record.game.clone()).or_default();
        stats.rounds += 1;
        if record.correct {
            stats.correct += 1;
        }
        stats.total_time_secs += record.time_secs;
    }
    by_game
}

pub fn print_stats(log: &ScoreLog) -> Result<()> {
    let records = log.load()?;
    if records.is_empty() {
        println!("No rounds recorded yet.");
        return Ok(());
    }
    println!(
        "{:<16} {:>8} {:>8} {:>9} {:>10}",
        "Game", "Rounds", "Correct", "Accuracy", "Avg time"
    );
    for (game, stats) in aggregate(&records) {
        println!(
            "{:<16} {:>8} {:>8} {:>8.1}% {:>9.2}s",
            game,
            stats.rounds,
            stats.correct,
            stats.accuracy(),
            stats.avg_time_secs()
        );
    }
    Ok(())
}
