//! Collaborator-facing payload rendering and reply enforcement.
//!
//! An external text generator receives the same facts the local narrator
//! consumes, rendered as a structured text block. The labels, field shapes,
//! and line order are a compatibility contract; whichever path produces the
//! narrative, both describe the world identically.

use activity_model::NarrativeContext;
use thiserror::Error;

use crate::location::Location;
use crate::narrator::{Narrative, FALLBACK_STEP};

/// Errors crossing the external-generator boundary.
#[derive(Debug, Error)]
pub enum ReplyError {
    /// The generator reply was not valid JSON at all.
    #[error("malformed generator reply: {0}")]
    MalformedReply(#[from] serde_json::Error),
}

/// Render the prompt payload for the external generator.
///
/// In order: time-of-day line, current-location line, recent-action block,
/// loop-summary block, prediction block, and the closing generation
/// instruction. Rare loops ride on the context but are not rendered.
pub fn render_prompt(ctx: &NarrativeContext) -> String {
    let now = Location::of_context(ctx).breadcrumb();

    let actions = if ctx.recent_actions.is_empty() {
        "No recent actions.".to_string()
    } else {
        ctx.recent_actions
            .iter()
            .map(|action| {
                format!(
                    "{} — {} {}s{}",
                    action.time,
                    Location::of_action(action).breadcrumb(),
                    action.duration_s,
                    if action.typed { " [typed]" } else { "" }
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let loop_summary = match &ctx.loop_position {
        Some(position) => format!(
            "Loop: \"{}\"\nSeen {}x | Confidence: {:.2}\nHere: {}\nNext: {}",
            position.signature,
            position.times_seen,
            position.confidence,
            position.current_step,
            position.next_step.as_deref().unwrap_or("end"),
        ),
        None => "Not in a recognized loop yet.".to_string(),
    };

    let predictions = if ctx.predictions.is_empty() {
        "No predictions yet.".to_string()
    } else {
        ctx.predictions
            .iter()
            .map(|prediction| format!("{} (seen {}x)", prediction.to_step, prediction.times_seen))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "TIME: {}:00 on {}\n\
         NOW: {}\n\
         \n\
         RECENT FOOTPRINTS:\n\
         {}\n\
         \n\
         LOOP POSITION:\n\
         {}\n\
         \n\
         WHAT USUALLY FOLLOWS:\n\
         {}\n\
         \n\
         Generate H/P/F. Reference specific records and sections. F = exactly 2-3 steps.",
        ctx.time_of_day.hour, ctx.time_of_day.day_name, now, actions, loop_summary, predictions
    )
}

/// Parse an external generator reply and enforce the published shape.
///
/// Missing or mistyped fields are default-filled rather than rejected:
/// absent history/present get fixed fallback phrases, a non-list forecast
/// becomes a single entry, and the list is padded/truncated into 2..=3
/// entries. Only a reply that fails to parse as JSON is an error.
pub fn parse_reply(raw: &str) -> Result<Narrative, ReplyError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let history = field_string(&value, "H");
    let present = field_string(&value, "P");

    let future = match value.get("F") {
        Some(serde_json::Value::Array(entries)) => {
            entries.iter().map(entry_string).collect()
        }
        Some(serde_json::Value::Null) | None => Vec::new(),
        Some(other) => {
            let entry = entry_string(other);
            if entry.is_empty() {
                vec![FALLBACK_STEP.to_string()]
            } else {
                vec![entry]
            }
        }
    };

    Ok(Narrative {
        history,
        present,
        future,
    }
    .enforce_shape())
}

fn field_string(value: &serde_json::Value, key: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn entry_string(value: &serde_json::Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
