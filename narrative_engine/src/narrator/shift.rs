//! Shift detection - finding the last materially different place.

use activity_model::NarrativeContext;

use crate::location::Location;

/// What a backward scan of the timeline concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftOutcome {
    /// Fewer than two recorded actions; nothing to look back on.
    InsufficientHistory,

    /// Every meaningful action happened in the current place. Distinct from
    /// having no actions at all.
    Settled,

    /// The most recent action in a materially different place.
    Shifted(ShiftReport),
}

/// The matched action's facts, as the look-back sentence needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftReport {
    /// Where the action happened, as a display breadcrumb.
    pub breadcrumb: String,

    /// Whether the user typed there.
    pub typed: bool,

    /// How long the user dwelled there, in seconds.
    pub duration_s: u32,
}

impl ShiftReport {
    /// Render the dwell duration: raw seconds under a minute, rounded
    /// minutes from there on.
    pub fn duration_label(&self) -> String {
        if self.duration_s >= 60 {
            let minutes = (f64::from(self.duration_s) / 60.0).round() as u32;
            format!("~{} min", minutes)
        } else {
            format!("~{}s", self.duration_s)
        }
    }
}

/// Scan the timeline from most recent to oldest for the first action whose
/// place materially differs from the current one.
///
/// Dwells under `noise_floor_s` seconds are skipped as noise. An action
/// shifts when its canonical identity differs from the current one, or when
/// it shares the current building but sits in a different apartment or room.
/// The first qualifying action wins; the scan stops there.
pub fn detect_shift(ctx: &NarrativeContext, noise_floor_s: u32) -> ShiftOutcome {
    if ctx.recent_actions.len() < 2 {
        return ShiftOutcome::InsufficientHistory;
    }

    let here = Location::of_context(ctx);

    for action in ctx.recent_actions.iter().rev() {
        if action.duration_s < noise_floor_s {
            continue;
        }

        let there = Location::of_action(action);

        let moved_building = there.canonical() != here.canonical();
        let moved_within = match (&here, &there) {
            (
                Location::Nested {
                    building,
                    room,
                    apartment,
                },
                Location::Nested {
                    building: there_building,
                    room: there_room,
                    apartment: there_apartment,
                },
            ) => building == there_building && (room != there_room || apartment != there_apartment),
            _ => false,
        };

        if moved_building || moved_within {
            tracing::debug!(from = %there.breadcrumb(), "context shift found");
            return ShiftOutcome::Shifted(ShiftReport {
                breadcrumb: there.breadcrumb(),
                typed: action.typed,
                duration_s: action.duration_s,
            });
        }
    }

    ShiftOutcome::Settled
}
