//! Presence description - where the user is right now.

use activity_model::NarrativeContext;

use crate::location::Location;

/// Render the current-location sentence.
///
/// The typing qualifier is a recency-windowed OR over the latest
/// `typing_window` actions: any of them in the current place with text
/// entry sets it, not just the very latest action.
pub fn describe_presence(ctx: &NarrativeContext, typing_window: usize) -> String {
    let here = Location::of_context(ctx);

    let typing_here = ctx
        .recent_actions
        .iter()
        .rev()
        .take(typing_window)
        .any(|action| action.typed && here.covers_action(action));

    let suffix = if typing_here {
        " — actively typing."
    } else {
        "."
    };

    format!("You're in {}{}", here.breadcrumb(), suffix)
}
