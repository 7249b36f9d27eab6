//! Learning progress tracker for a saved roadmap.
//!
//! Lives only for the current session.

use crate::types::Level;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTracker {
    pub career: String,
    pub level: Level,
    pub tasks: Vec<String>,
    /// Indices into `tasks` that are done
    completed: BTreeSet<usize>,
}

impl LearningTracker {
    pub fn new(career: impl Into<String>, level: Level, tasks: Vec<String>) -> Self {
        Self {
            career: career.into(),
            level,
            tasks,
            completed: BTreeSet::new(),
        }
    }

    /// Flip a task between done and pending. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.tasks.len() {
            return;
        }
        if !self.completed.remove(&index) {
            self.completed.insert(index);
        }
    }

    pub fn mark_done(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.completed.insert(index);
        }
    }

    pub fn is_done(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Fraction of tasks done, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed.len() as f64 / self.tasks.len() as f64
    }

    /// First task not yet done.
    pub fn next_pending(&self) -> Option<(usize, &str)> {
        self.tasks
            .iter()
            .enumerate()
            .find(|(i, _)| !self.completed.contains(i))
            .map(|(i, t)| (i, t.as_str()))
    }

    pub fn is_complete(&self) -> bool {
        !self.tasks.is_empty() && self.completed.len() == self.tasks.len()
    }
}
