//! High score leaderboard system
//!
//! Persisted as JSON, tracks the top 10 final scores.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::{self, PersistError};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score (quarter points from pipes, whole points from bricks)
    pub score: f64,
    /// Seconds survived
    pub survived_secs: f64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Board index a score would take; equal scores keep arrival order
    fn slot(&self, score: f64) -> usize {
        self.entries.partition_point(|e| e.score >= score)
    }

    /// A finished run enters the board when it scored and lands in the top ten
    pub fn qualifies(&self, score: f64) -> bool {
        score > 0.0 && self.slot(score) < MAX_HIGH_SCORES
    }

    /// Record a finished run, returning its 1-indexed rank if it made the board
    pub fn add_score(&mut self, score: f64, survived_secs: f64, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let slot = self.slot(score);
        self.entries.insert(
            slot,
            HighScoreEntry {
                score,
                survived_secs,
                timestamp,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    pub fn top_score(&self) -> Option<f64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores from disk, starting fresh if missing or corrupt
    pub fn load(path: &Path) -> Self {
        match persistence::load_json::<HighScores>(path) {
            Ok(mut scores) => {
                scores
                    .entries
                    .sort_by(|a, b| b.score.total_cmp(&a.score));
                scores.entries.truncate(MAX_HIGH_SCORES);
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Err(e) => {
                log::info!("No high scores loaded ({e}), starting fresh");
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        persistence::save_json(path, self)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0.0));
        assert!(scores.qualifies(0.25));
    }

    #[test]
    fn test_ranking_and_truncation() {
        let mut scores = HighScores::new();
        for i in 1..=10 {
            scores.add_score(i as f64, 0.0, 0.0);
        }
        assert_eq!(scores.top_score(), Some(10.0));
        assert_eq!(scores.entries.last().unwrap().score, 1.0);

        // A tie with the last entry or anything lower stays off a full board
        assert!(!scores.qualifies(1.0));
        assert_eq!(scores.add_score(0.75, 0.0, 0.0), None);

        assert_eq!(scores.add_score(5.5, 12.0, 1.0), Some(6));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().unwrap().score, 2.0);
    }

    #[test]
    fn test_ties_rank_below_earlier_runs() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(2.0, 10.0, 1.0), Some(1));
        assert_eq!(scores.add_score(2.0, 11.0, 2.0), Some(2));
        assert_eq!(scores.add_score(2.25, 12.0, 3.0), Some(1));
        let stamps: Vec<f64> = scores.entries.iter().map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![3.0, 1.0, 2.0]);
        assert_eq!(scores.add_score(f64::NAN, 0.0, 4.0), None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("flap-blaster-hs-{}", std::process::id()));
        let path = dir.join("scores.json");
        let mut scores = HighScores::new();
        scores.add_score(3.25, 20.0, 1.0);
        scores.add_score(7.0, 40.0, 2.0);
        scores.save(&path).unwrap();

        let loaded = HighScores::load(&path);
        assert_eq!(loaded.entries, scores.entries);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
