//! Observability hooks for sampling runs.
//!
//! Runs are silent by default. Callers that want to watch a walk pass a
//! [`WalkObserver`]; aggregate counters come back in [`WalkStats`] either way.

use crate::mh_walk::{StepOutcome, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent {
    /// State initialized at `start`; the run aims for `target` distinct nodes.
    Started { start: usize, target: usize },
    /// One step was taken. `current` and `visited` describe the state after it.
    Step { outcome: StepOutcome, current: usize, visited: usize },
    /// The run reached a terminal state with `visited` distinct nodes.
    Finished { termination: Termination, visited: usize },
}

pub trait WalkObserver {
    fn on_event(&mut self, event: &WalkEvent);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl WalkObserver for NoopObserver {
    fn on_event(&mut self, _event: &WalkEvent) {}
}

impl<F: FnMut(&WalkEvent)> WalkObserver for F {
    fn on_event(&mut self, event: &WalkEvent) {
        self(event)
    }
}

/// Per-run step counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkStats {
    pub steps: usize,
    /// Proposals accepted (`revisits + discovered`).
    pub accepted: usize,
    pub rejected: usize,
    /// Steps taken from a node with no neighbors.
    pub isolated: usize,
    pub revisits: usize,
    pub discovered: usize,
}

impl WalkStats {
    pub(crate) fn record(&mut self, outcome: StepOutcome) {
        self.steps += 1;
        match outcome {
            StepOutcome::Isolated => self.isolated += 1,
            StepOutcome::Rejected => self.rejected += 1,
            StepOutcome::Revisited => {
                self.accepted += 1;
                self.revisits += 1;
            }
            StepOutcome::Discovered => {
                self.accepted += 1;
                self.discovered += 1;
            }
        }
    }

    /// Fraction of proposals that were accepted; `1.0` when nothing was proposed.
    pub fn acceptance_rate(&self) -> f64 {
        let proposals = self.accepted + self.rejected;
        if proposals == 0 {
            return 1.0;
        }
        self.accepted as f64 / proposals as f64
    }
}
