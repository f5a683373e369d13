//! Future planning - merging declared loop knowledge with statistics.
//!
//! The planner prefers what the loop recognizer *declared* about the user's
//! position over what transition statistics merely suggest. Statistical
//! entries only backfill remaining forecast slots.

mod steps;

pub use steps::*;

use activity_model::{LoopPosition, Prediction};

/// Fixed fallback lines for users with no recognized loops or predictions yet.
pub const ENCOURAGEMENT: [&str; 2] = [
    "Waymark is still mapping your loops — keep working",
    "The more you use it, the sharper it gets",
];

/// Merge an optional declared loop position with ranked predictions into a
/// capped, de-duplicated forecast of 1 to `cap` entries.
///
/// De-duplication is substring containment against already-accepted entries,
/// not exact match: a `Next:`/`Then:` entry that textually includes a
/// predicted breadcrumb suppresses the redundant `Usually:` entry.
pub fn plan_future(
    loop_position: Option<&LoopPosition>,
    predictions: &[Prediction],
    cap: usize,
) -> Vec<String> {
    let mut forecast = Vec::new();

    if let Some(position) = loop_position {
        if let Some(next) = &position.next_step {
            forecast.push(format!("Next: {}", format_step(next)));

            // A "Then" line needs two declared steps ahead, even when the
            // raw step sequence happens to extend further.
            if position.steps_left >= 2 {
                if let Some(after_next) = position.steps.get(position.current_index + 2) {
                    forecast.push(format!("Then: {}", format_step(after_next)));
                }
            }
        }
    }

    for prediction in predictions {
        if forecast.len() >= cap {
            break;
        }

        let formatted = format_step(&prediction.to_step);
        if !forecast.iter().any(|entry| entry.contains(&formatted)) {
            forecast.push(format!("Usually: {}", formatted));
        }
    }

    if forecast.is_empty() {
        tracing::debug!("no loop or predictions yet, falling back to encouragement");
        forecast = ENCOURAGEMENT.iter().map(|line| line.to_string()).collect();
    }

    forecast.truncate(cap);
    forecast
}
