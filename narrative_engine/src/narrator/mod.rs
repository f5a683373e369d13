//! The narrator - compiles the three-part narrative.
//!
//! Orchestrates shift detection, presence description, and future planning
//! into the `H`/`P`/`F` result. Pure: identical contexts compile to
//! identical narratives.

mod presence;
mod shift;

pub use presence::*;
pub use shift::*;

use activity_model::NarrativeContext;
use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::planner::plan_future;

/// Look-back line for users with fewer than two recorded actions.
pub const BRAND_NEW_LINE: &str =
    "Waymark is brand new here — keep working and it'll start remembering your loops.";

/// Default history when a candidate narrative carries none.
pub const FALLBACK_HISTORY: &str = "No history available.";

/// Default present when a candidate narrative carries none.
pub const FALLBACK_PRESENT: &str = "Present unknown.";

/// Padding entry for forecasts shorter than the published minimum.
pub const FALLBACK_STEP: &str = "Keep going";

/// Configuration for narrative compilation.
#[derive(Debug, Clone)]
pub struct NarratorConfig {
    /// Dwells shorter than this many seconds are noise, not real presence.
    pub noise_floor_s: u32,

    /// How many of the latest actions the typing check examines.
    pub typing_window: usize,

    /// Upper bound on forecast entries.
    pub max_forecast: usize,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            noise_floor_s: 5,
            typing_window: 5,
            max_forecast: 3,
        }
    }
}

/// The compiled three-part narrative.
///
/// Serializes with the `H`/`P`/`F` field names of the external generator
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    /// Look-back: the last major shift ("H").
    #[serde(rename = "H")]
    pub history: String,

    /// Present-location statement ("P").
    #[serde(rename = "P")]
    pub present: String,

    /// Forecasted next steps, 2-3 entries ("F").
    #[serde(rename = "F")]
    pub future: Vec<String>,
}

impl Narrative {
    /// Normalize a candidate narrative into the published shape: non-empty
    /// history and present, forecast length in 2..=3.
    ///
    /// Applied to externally generated candidates and to locally compiled
    /// output alike, so both paths satisfy one invariant.
    pub fn enforce_shape(mut self) -> Self {
        if self.history.is_empty() {
            self.history = FALLBACK_HISTORY.to_string();
        }
        if self.present.is_empty() {
            self.present = FALLBACK_PRESENT.to_string();
        }

        self.future.truncate(3);
        while self.future.len() < 2 {
            self.future.push(FALLBACK_STEP.to_string());
        }

        self
    }
}

/// Compiles H/P/F narratives from activity contexts.
pub struct Narrator {
    config: NarratorConfig,
}

impl Narrator {
    /// Create a narrator with the given configuration.
    pub fn new(config: NarratorConfig) -> Self {
        Self { config }
    }

    /// Create a narrator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(NarratorConfig::default())
    }

    /// Compile the full three-part narrative.
    ///
    /// The result always has a non-empty history and present, and 2-3
    /// forecast entries.
    pub fn compile(&self, ctx: &NarrativeContext) -> Narrative {
        Narrative {
            history: self.look_back(ctx),
            present: describe_presence(ctx, self.config.typing_window),
            future: plan_future(
                ctx.loop_position.as_ref(),
                &ctx.predictions,
                self.config.max_forecast,
            ),
        }
        .enforce_shape()
    }

    /// Render the look-back sentence from the shift scan.
    fn look_back(&self, ctx: &NarrativeContext) -> String {
        match detect_shift(ctx, self.config.noise_floor_s) {
            ShiftOutcome::InsufficientHistory => BRAND_NEW_LINE.to_string(),
            ShiftOutcome::Settled => format!(
                "You've been in {} for a while.",
                Location::of_context(ctx).canonical()
            ),
            ShiftOutcome::Shifted(report) => format!(
                "Before this, you were in {}{} for {}.",
                report.breadcrumb,
                if report.typed { " typing" } else { "" },
                report.duration_label()
            ),
        }
    }
}


#[cfg(test)]
mod shape_props {
    use super::*;
    use activity_model::{ActionRecord, BrowserContext, LoopPosition, Prediction, TimeOfDay};
    use proptest::collection::vec;
    use proptest::option;
    use proptest::prelude::*;

    fn arb_label() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{2,8}"
    }

    fn arb_action() -> impl Strategy<Value = ActionRecord> {
        (
            arb_label(),
            option::of(arb_label()),
            option::of(arb_label()),
            option::of(arb_label()),
            0u32..600,
            any::<bool>(),
        )
            .prop_map(|(label, building, room, apartment, duration_s, typed)| {
                let action = match building {
                    Some(building) => {
                        let mut nested = ActionRecord::nested("10:00", building);
                        if let Some(room) = room {
                            nested = nested.with_room(room);
                        }
                        if let Some(apartment) = apartment {
                            nested = nested.with_apartment(apartment);
                        }
                        nested
                    }
                    None => ActionRecord::flat("10:00", label),
                };
                action.with_duration(duration_s).with_typed(typed)
            })
    }

    fn arb_loop() -> impl Strategy<Value = LoopPosition> {
        (
            arb_label(),
            vec(arb_label(), 1..5),
            any::<usize>(),
            0.0f32..=1.0,
        )
            .prop_map(|(signature, steps, raw_index, confidence)| {
                let index = raw_index % steps.len();
                LoopPosition::new(signature, steps[index].clone())
                    .with_steps(steps, index)
                    .with_confidence(confidence)
            })
    }

    fn arb_context() -> impl Strategy<Value = NarrativeContext> {
        (
            arb_label(),
            option::of((arb_label(), option::of(arb_label()), option::of(arb_label()))),
            vec(arb_action(), 0..8),
            option::of(arb_loop()),
            vec((arb_label(), 1u32..20).prop_map(|(s, n)| Prediction::new(s, n)), 0..5),
        )
            .prop_map(|(app, browser, actions, loop_position, predictions)| {
                let mut ctx = NarrativeContext::new(app, TimeOfDay::new(9, "Monday"))
                    .with_actions(actions)
                    .with_predictions(predictions);
                if let Some((building, room, apartment)) = browser {
                    let mut browser_ctx = BrowserContext::new(building);
                    if let Some(room) = room {
                        browser_ctx = browser_ctx.with_room(room);
                    }
                    if let Some(apartment) = apartment {
                        browser_ctx = browser_ctx.with_apartment(apartment);
                    }
                    ctx = ctx.with_browser_ctx(browser_ctx);
                }
                if let Some(position) = loop_position {
                    ctx = ctx.with_loop(position);
                }
                ctx
            })
    }

    proptest! {
        #[test]
        fn compile_always_satisfies_published_shape(ctx in arb_context()) {
            let narrative = Narrator::with_defaults().compile(&ctx);

            prop_assert!(!narrative.history.is_empty());
            prop_assert!(!narrative.present.is_empty());
            prop_assert!((2..=3).contains(&narrative.future.len()));
        }
    }
}
