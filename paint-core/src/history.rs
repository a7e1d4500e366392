// Undo/redo history over full-surface snapshots.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;
use tracing::{debug, trace};

/// How many states each stack keeps unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Two capped stacks of states. The back of each deque is the most recent entry.
///
/// Undo and redo both re-commit the state they land on, so the top of `undo`
/// is always the state currently displayed.
#[derive(Debug, Clone)]
pub struct History<S> {
    undo: VecDeque<S>,
    redo: VecDeque<S>,
    max_depth: usize,
}

impl<S: Clone> History<S> {
    /// Create a history whose only entry is `baseline`.
    pub fn new(max_depth: usize, baseline: S) -> Result<Self, HistoryError> {
        if max_depth == 0 {
            return Err(HistoryError::ZeroDepth);
        }

        debug!(max_depth, "creating history");
        let mut history = Self {
            undo: VecDeque::with_capacity(max_depth),
            redo: VecDeque::with_capacity(max_depth),
            max_depth,
        };
        history.commit(baseline);
        Ok(history)
    }

    pub fn from_config(config: &HistoryConfig, baseline: S) -> Result<Self, HistoryError> {
        Self::new(config.max_depth, baseline)
    }

    /// Record a new state. Discards the redo branch.
    pub fn commit(&mut self, state: S) {
        push_bounded(&mut self.undo, state, self.max_depth);
        self.redo.clear();
        trace!(undo = self.undo.len(), "committed state");
    }

    /// Step back one state and return it, or `None` if only the baseline is left.
    ///
    /// The state stepped away from becomes the sole redo entry; anything that
    /// was on the redo stack before is dropped by the re-commit.
    pub fn undo(&mut self) -> Option<S> {
        if self.undo.len() <= 1 {
            trace!("undo ignored, nothing before the baseline");
            return None;
        }

        let undone = self.undo.pop_back()?;
        let prev = self.undo.back()?.clone();
        self.commit(prev.clone());
        push_bounded(&mut self.redo, undone, self.max_depth);

        debug!(undo = self.undo.len(), redo = self.redo.len(), "undo");
        Some(prev)
    }

    /// Re-apply the most recently undone state and return it.
    pub fn redo(&mut self) -> Option<S> {
        let next = match self.redo.pop_back() {
            Some(state) => state,
            None => {
                trace!("redo ignored, redo stack empty");
                return None;
            }
        };

        push_bounded(&mut self.undo, next.clone(), self.max_depth);
        self.commit(next.clone());

        debug!(undo = self.undo.len(), redo = self.redo.len(), "redo");
        Some(next)
    }

    /// Drop everything and start over from `baseline`.
    pub fn reset(&mut self, baseline: S) {
        debug!("resetting history");
        self.undo.clear();
        self.redo.clear();
        self.commit(baseline);
    }
}

impl<S> History<S> {
    /// The most recently committed state.
    pub fn current(&self) -> &S {
        // `new` commits a baseline and nothing pops the last entry.
        &self.undo[self.undo.len() - 1]
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Undo entries, oldest first.
    pub fn undo_entries(&self) -> impl Iterator<Item = &S> {
        self.undo.iter()
    }

    /// Redo entries, oldest first.
    pub fn redo_entries(&self) -> impl Iterator<Item = &S> {
        self.redo.iter()
    }
}

fn push_bounded<S>(stack: &mut VecDeque<S>, state: S, max_depth: usize) {
    if stack.len() >= max_depth {
        stack.pop_front();
    }
    stack.push_back(state);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history depth must be at least 1")]
    ZeroDepth,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(history: &History<u32>) -> (Vec<u32>, Vec<u32>) {
        (
            history.undo_entries().copied().collect(),
            history.redo_entries().copied().collect(),
        )
    }

    #[test]
    fn zero_depth_is_rejected() {
        assert_eq!(History::new(0, 0u32).unwrap_err(), HistoryError::ZeroDepth);
    }

    #[test]
    fn starts_with_baseline_only() {
        let history = History::new(4, 0u32).unwrap();
        assert_eq!(entries(&history), (vec![0], vec![]));
        assert_eq!(*history.current(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_recommits_previous_state() {
        let mut history = History::new(5, 0u32).unwrap();
        history.commit(1);
        history.commit(2);

        assert_eq!(history.undo(), Some(1));
        assert_eq!(entries(&history), (vec![0, 1, 1], vec![2]));
        assert_eq!(*history.current(), 1);
    }

    #[test]
    fn consecutive_undos_keep_only_latest_redo() {
        let mut history = History::new(5, 0u32).unwrap();
        history.commit(1);
        history.commit(2);

        history.undo();
        // The duplicate of 1 is popped, so the surface stays on 1.
        assert_eq!(history.undo(), Some(1));
        assert_eq!(entries(&history), (vec![0, 1, 1], vec![1]));
    }

    #[test]
    fn redo_pushes_twice_and_clears_branch() {
        let mut history = History::new(5, 0u32).unwrap();
        history.commit(1);
        history.undo();

        assert_eq!(history.redo(), Some(1));
        assert_eq!(entries(&history), (vec![0, 0, 1, 1], vec![]));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn redo_respects_undo_bound() {
        let mut history = History::new(3, 0u32).unwrap();
        history.commit(1);
        history.commit(2);
        history.undo();

        assert_eq!(history.redo(), Some(2));
        assert_eq!(entries(&history), (vec![1, 2, 2], vec![]));
    }

    #[test]
    fn commit_discards_redo() {
        let mut history = History::new(5, 0u32).unwrap();
        history.commit(1);
        history.undo();
        assert!(history.can_redo());

        history.commit(7);
        assert_eq!(entries(&history), (vec![0, 0, 7], vec![]));
    }

    #[test]
    fn reset_returns_to_single_baseline() {
        let mut history = History::new(5, 0u32).unwrap();
        history.commit(1);
        history.commit(2);
        history.undo();

        history.reset(9);
        assert_eq!(entries(&history), (vec![9], vec![]));
    }

    #[test]
    fn config_defaults_depth() {
        let config = HistoryConfig::default();
        let history = History::from_config(&config, 0u32).unwrap();
        assert_eq!(history.max_depth(), DEFAULT_MAX_DEPTH);
    }
}
