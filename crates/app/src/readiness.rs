//! Readiness gate — holds work until the page signals it can run.
//!
//! Tasks declare which [`Readiness`] signals they need. A task whose
//! signals are all marked is released exactly once, either immediately on
//! [`ReadinessGate::when`] or by the [`ReadinessGate::mark`] call that
//! completes its set.

use std::collections::BTreeSet;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Readiness {
    /// The document has been parsed.
    DomReady,
    /// The document and its subresources have loaded.
    PageLoaded,
}

#[derive(Debug)]
pub struct ReadinessGate<T> {
    marked: BTreeSet<Readiness>,
    pending: Vec<(Vec<Readiness>, T)>,
}

impl<T> Default for ReadinessGate<T> {
    fn default() -> Self {
        Self {
            marked: BTreeSet::new(),
            pending: Vec::new(),
        }
    }
}

impl<T> ReadinessGate<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_marked(&self, signal: Readiness) -> bool {
        self.marked.contains(&signal)
    }

    /// Number of tasks still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Queue `task` until every signal in `requires` is marked.
    ///
    /// Returns the task back when it can already run.
    pub fn when(&mut self, requires: &[Readiness], task: T) -> Option<T> {
        if requires.iter().all(|s| self.marked.contains(s)) {
            return Some(task);
        }
        self.pending.push((requires.to_vec(), task));
        None
    }

    /// Record `signal` and return the tasks it releases, in queue order.
    ///
    /// Marking a signal twice releases nothing the second time.
    pub fn mark(&mut self, signal: Readiness) -> Vec<T> {
        if !self.marked.insert(signal) {
            return Vec::new();
        }
        let (ready, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|(requires, _)| requires.iter().all(|s| self.marked.contains(s)));
        self.pending = waiting;
        debug!(?signal, released = ready.len(), "readiness signal marked");
        ready.into_iter().map(|(_, task)| task).collect()
    }
}
