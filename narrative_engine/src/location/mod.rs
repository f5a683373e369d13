//! Location resolution - one resolved "where" for actions and contexts.
//!
//! The tracker records places in two shapes: a nested
//! building/apartment/room capture, or a flat application/category label.
//! Instead of scattering optional-field checks across the engine, the
//! branching collapses here into a single variant. Every other component
//! consumes only the two derived outputs: [`Location::canonical`] for
//! equality and [`Location::breadcrumb`] for display.

use activity_model::{ActionRecord, NarrativeContext};
use serde::{Deserialize, Serialize};

/// Separator between breadcrumb segments in all display output.
pub const CRUMB_SEPARATOR: &str = " › ";

/// A resolved place, for an action or for the current context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// Only a flat application/category label was captured.
    Flat(String),

    /// A nested capture inside a building, with optional sub-tiers.
    Nested {
        building: String,
        room: Option<String>,
        apartment: Option<String>,
    },
}

impl Location {
    /// Resolve the current place from a context: the nested browser capture
    /// when present, else the foreground app.
    pub fn of_context(ctx: &NarrativeContext) -> Self {
        match &ctx.browser_ctx {
            Some(browser) => Location::Nested {
                building: browser.building.clone(),
                room: browser.room.clone(),
                apartment: browser.apartment.clone(),
            },
            None => Location::Flat(ctx.current_app.clone()),
        }
    }

    /// Resolve the place a recorded action happened in.
    ///
    /// Falls back from `building` to `category` to `app`; records always
    /// carry at least one of them.
    pub fn of_action(action: &ActionRecord) -> Self {
        match &action.building {
            Some(building) => Location::Nested {
                building: building.clone(),
                room: action.room.clone(),
                apartment: action.apartment.clone(),
            },
            None => Location::Flat(
                action
                    .category
                    .clone()
                    .or_else(|| action.app.clone())
                    .unwrap_or_default(),
            ),
        }
    }

    /// The identity label used for equality comparisons: the building when
    /// nested, the flat label otherwise.
    pub fn canonical(&self) -> &str {
        match self {
            Location::Flat(label) => label,
            Location::Nested { building, .. } => building,
        }
    }

    /// The display breadcrumb: `building › room › apartment` with absent
    /// segments omitted (room precedes apartment), or the flat label.
    pub fn breadcrumb(&self) -> String {
        match self {
            Location::Flat(label) => label.clone(),
            Location::Nested {
                building,
                room,
                apartment,
            } => {
                let mut parts = vec![building.as_str()];
                if let Some(room) = room {
                    parts.push(room);
                }
                if let Some(apartment) = apartment {
                    parts.push(apartment);
                }
                parts.join(CRUMB_SEPARATOR)
            }
        }
    }

    /// Same-place test for the typing window: a nested location matches
    /// actions recorded in its building, a flat one matches actions whose
    /// category (or app) equals its label.
    pub fn covers_action(&self, action: &ActionRecord) -> bool {
        match self {
            Location::Flat(label) => {
                action
                    .category
                    .as_deref()
                    .or(action.app.as_deref())
                    == Some(label.as_str())
            }
            Location::Nested { building, .. } => {
                action.building.as_deref() == Some(building.as_str())
            }
        }
    }
}
