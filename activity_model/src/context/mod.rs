//! Narrative context - the assembled input the engine consumes.

use serde::{Deserialize, Serialize};

use crate::action::ActionRecord;
use crate::workflow::{LoopPosition, Prediction, RareLoop};

/// Nested location of the current browser tab, when one was captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserContext {
    /// The application/environment (top tier, always present when nested).
    pub building: String,

    /// The specific record inside the building.
    pub apartment: Option<String>,

    /// The section or view inside the building.
    pub room: Option<String>,
}

impl BrowserContext {
    /// Create a browser context for a building.
    pub fn new(building: impl Into<String>) -> Self {
        Self {
            building: building.into(),
            apartment: None,
            room: None,
        }
    }

    /// Set the apartment.
    pub fn with_apartment(mut self, apartment: impl Into<String>) -> Self {
        self.apartment = Some(apartment.into());
        self
    }

    /// Set the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

/// Wall-clock framing for the narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub day_name: String,
}

impl TimeOfDay {
    /// Create a new time-of-day marker.
    pub fn new(hour: u8, day_name: impl Into<String>) -> Self {
        Self {
            hour,
            day_name: day_name.into(),
        }
    }
}

/// Everything the engine knows for a single invocation.
///
/// Assembled entirely in memory by collaborators; the engine treats it as
/// immutable for the duration of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeContext {
    /// The application currently in the foreground.
    pub current_app: String,

    /// Nested location of the current tab, when captured.
    pub browser_ctx: Option<BrowserContext>,

    /// Recent history, chronological, oldest first.
    pub recent_actions: Vec<ActionRecord>,

    /// Position inside a recognized loop, when one matched.
    pub loop_position: Option<LoopPosition>,

    /// Ranked statistical predictions, most likely first.
    pub predictions: Vec<Prediction>,

    /// Loops seen too rarely to narrate from; passed through to collaborators.
    pub rare_loops: Vec<RareLoop>,

    /// Wall-clock framing.
    pub time_of_day: TimeOfDay,
}

impl NarrativeContext {
    /// Create a context for the given foreground app.
    pub fn new(current_app: impl Into<String>, time_of_day: TimeOfDay) -> Self {
        Self {
            current_app: current_app.into(),
            browser_ctx: None,
            recent_actions: Vec::new(),
            loop_position: None,
            predictions: Vec::new(),
            rare_loops: Vec::new(),
            time_of_day,
        }
    }

    /// Attach the nested location of the current tab.
    pub fn with_browser_ctx(mut self, browser_ctx: BrowserContext) -> Self {
        self.browser_ctx = Some(browser_ctx);
        self
    }

    /// Append one recorded action to the history.
    pub fn with_action(mut self, action: ActionRecord) -> Self {
        self.recent_actions.push(action);
        self
    }

    /// Replace the recorded history.
    pub fn with_actions(mut self, actions: Vec<ActionRecord>) -> Self {
        self.recent_actions = actions;
        self
    }

    /// Attach a recognized loop position.
    pub fn with_loop(mut self, loop_position: LoopPosition) -> Self {
        self.loop_position = Some(loop_position);
        self
    }

    /// Replace the prediction list.
    pub fn with_predictions(mut self, predictions: Vec<Prediction>) -> Self {
        self.predictions = predictions;
        self
    }

    /// Replace the rare-loop list.
    pub fn with_rare_loops(mut self, rare_loops: Vec<RareLoop>) -> Self {
        self.rare_loops = rare_loops;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_assembly() {
        let ctx = NarrativeContext::new("Salesforce", TimeOfDay::new(9, "Tuesday"))
            .with_browser_ctx(
                BrowserContext::new("Salesforce")
                    .with_apartment("John Smith")
                    .with_room("Activities"),
            )
            .with_action(ActionRecord::flat("08:55", "Mail").with_duration(120))
            .with_predictions(vec![Prediction::new("Salesforce:Pipeline", 4)]);

        assert_eq!(ctx.current_app, "Salesforce");
        assert_eq!(ctx.recent_actions.len(), 1);
        assert_eq!(ctx.predictions.len(), 1);
        assert!(ctx.loop_position.is_none());

        let browser = ctx.browser_ctx.as_ref().unwrap();
        assert_eq!(browser.building, "Salesforce");
        assert_eq!(browser.room.as_deref(), Some("Activities"));
    }

    #[test]
    fn test_empty_context_defaults() {
        let ctx = NarrativeContext::new("Figma", TimeOfDay::new(15, "Friday"));

        assert!(ctx.recent_actions.is_empty());
        assert!(ctx.predictions.is_empty());
        assert!(ctx.rare_loops.is_empty());
        assert!(ctx.browser_ctx.is_none());
    }
}
