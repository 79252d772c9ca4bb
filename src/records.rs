//! Session records
//!
//! Best runs of the current session, ranked by distance. Kept in memory
//! only; nothing survives a restart.

use serde::{Deserialize, Serialize};

/// Maximum number of runs to keep
pub const MAX_RECORDS: usize = 5;

/// A finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Top velocity [m/h]
    pub top_velocity: i64,
    /// Distance covered [mm]
    pub distance: i64,
}

/// Session leaderboard, sorted by distance descending
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRecords {
    entries: Vec<RunRecord>,
}

impl SessionRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a run makes the board
    pub fn qualifies(&self, distance: i64) -> bool {
        if distance <= 0 {
            return false;
        }
        if self.entries.len() < MAX_RECORDS {
            return true;
        }
        self.entries.last().is_none_or(|e| distance > e.distance)
    }

    /// Insert a run; returns its 1-based rank, or None if it did not qualify
    pub fn add(&mut self, run: RunRecord) -> Option<usize> {
        if !self.qualifies(run.distance) {
            return None;
        }
        let pos = self
            .entries
            .iter()
            .position(|e| run.distance > e.distance)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, run);
        self.entries.truncate(MAX_RECORDS);
        log::info!("run ranked #{} this session", pos + 1);
        Some(pos + 1)
    }

    pub fn entries(&self) -> &[RunRecord] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
