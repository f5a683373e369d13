//! Recognized workflow loops and statistical next-step predictions.

use serde::{Deserialize, Serialize};

/// The user's position inside a recognized repeating workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopPosition {
    /// Identifier of the recognized repeating pattern.
    pub signature: String,

    /// How many times this loop has been observed (>= 1).
    pub times_seen: u32,

    /// Recognition confidence from 0.0 to 1.0.
    pub confidence: f32,

    /// The step the user is on right now.
    pub current_step: String,

    /// The step that follows, if any. `None` means end of loop.
    pub next_step: Option<String>,

    /// How many steps remain after the current one.
    pub steps_left: u32,

    /// The full ordered step sequence of the loop.
    pub steps: Vec<String>,

    /// Position of `current_step` within `steps`.
    pub current_index: usize,
}

impl LoopPosition {
    /// Create a loop position at the given step.
    pub fn new(signature: impl Into<String>, current_step: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            times_seen: 1,
            confidence: 0.0,
            current_step: current_step.into(),
            next_step: None,
            steps_left: 0,
            steps: Vec::new(),
            current_index: 0,
        }
    }

    /// Attach the full step sequence and derive `next_step` and `steps_left`
    /// from the given index.
    pub fn with_steps(mut self, steps: Vec<String>, current_index: usize) -> Self {
        self.next_step = steps.get(current_index + 1).cloned();
        self.steps_left = steps.len().saturating_sub(current_index + 1) as u32;
        self.steps = steps;
        self.current_index = current_index;
        self
    }

    /// Override the next step.
    pub fn with_next_step(mut self, next_step: impl Into<String>) -> Self {
        self.next_step = Some(next_step.into());
        self
    }

    /// Override the remaining step count.
    pub fn with_steps_left(mut self, steps_left: u32) -> Self {
        self.steps_left = steps_left;
        self
    }

    /// Set the recognition confidence (clamped to 0.0-1.0).
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Set how many times this loop has been observed.
    pub fn with_times_seen(mut self, times_seen: u32) -> Self {
        self.times_seen = times_seen;
        self
    }

    /// Check that `steps[current_index]` agrees with `current_step`.
    pub fn is_consistent(&self) -> bool {
        match self.steps.get(self.current_index) {
            Some(step) => step == &self.current_step,
            None => self.steps.is_empty(),
        }
    }
}

/// A statistical next-step prediction.
///
/// Prediction lists arrive pre-ranked (most likely first); consumers only
/// de-duplicate and cap, never re-rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Raw step identifier this prediction points at.
    pub to_step: String,

    /// How many times this transition has been observed (>= 1).
    pub times_seen: u32,
}

impl Prediction {
    /// Create a new prediction.
    pub fn new(to_step: impl Into<String>, times_seen: u32) -> Self {
        Self {
            to_step: to_step.into(),
            times_seen,
        }
    }
}

/// A loop observed too rarely to narrate from. Carried on the context for
/// collaborators, unused by the engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RareLoop {
    pub signature: String,
    pub times_seen: u32,
}

impl RareLoop {
    /// Create a new rare loop summary.
    pub fn new(signature: impl Into<String>, times_seen: u32) -> Self {
        Self {
            signature: signature.into(),
            times_seen,
        }
    }
}
