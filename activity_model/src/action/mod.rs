//! Observed action definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for recorded actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub Uuid);

impl ActionId {
    /// Create a new random action ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an action ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty action ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single observed action in the activity timeline.
///
/// At least one of `building`/`category`/`app` is always present; the two
/// constructors guarantee it. A record is immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: ActionId,

    /// Display timestamp (e.g. "14:32").
    pub time: String,

    /// Flat activity label, used when no nested location was captured.
    pub category: Option<String>,

    /// Flat application label, a weaker fallback for `category`.
    pub app: Option<String>,

    /// The application/environment the action happened in (top tier).
    pub building: Option<String>,

    /// The specific record inside the building (e.g. a customer account).
    pub apartment: Option<String>,

    /// The section or view inside the building (e.g. an activity log).
    pub room: Option<String>,

    /// How long the user dwelled here, in seconds.
    pub duration_s: u32,

    /// Whether the user entered text during this action.
    pub typed: bool,
}

impl ActionRecord {
    /// Create a flat action with a category label and no nested location.
    pub fn flat(time: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: ActionId::new(),
            time: time.into(),
            category: Some(category.into()),
            app: None,
            building: None,
            apartment: None,
            room: None,
            duration_s: 0,
            typed: false,
        }
    }

    /// Create an action observed inside a building.
    pub fn nested(time: impl Into<String>, building: impl Into<String>) -> Self {
        Self {
            id: ActionId::new(),
            time: time.into(),
            category: None,
            app: None,
            building: Some(building.into()),
            apartment: None,
            room: None,
            duration_s: 0,
            typed: false,
        }
    }

    /// Set the flat application label.
    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.app = Some(app.into());
        self
    }

    /// Set the apartment (the specific record inside the building).
    pub fn with_apartment(mut self, apartment: impl Into<String>) -> Self {
        self.apartment = Some(apartment.into());
        self
    }

    /// Set the room (the section inside the building).
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Set the dwell duration in seconds.
    pub fn with_duration(mut self, duration_s: u32) -> Self {
        self.duration_s = duration_s;
        self
    }

    /// Mark whether the user typed during this action.
    pub fn with_typed(mut self, typed: bool) -> Self {
        self.typed = typed;
        self
    }

    /// Check whether this action carries a nested location.
    pub fn has_nested(&self) -> bool {
        self.building.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_record() {
        let action = ActionRecord::flat("14:32", "Slack").with_duration(42);

        assert_eq!(action.category.as_deref(), Some("Slack"));
        assert_eq!(action.duration_s, 42);
        assert!(!action.has_nested());
        assert!(!action.typed);
    }

    #[test]
    fn test_nested_builder() {
        let action = ActionRecord::nested("09:15", "Salesforce")
            .with_apartment("Suzie Lee")
            .with_room("Accounts")
            .with_duration(180)
            .with_typed(true);

        assert!(action.has_nested());
        assert_eq!(action.building.as_deref(), Some("Salesforce"));
        assert_eq!(action.apartment.as_deref(), Some("Suzie Lee"));
        assert_eq!(action.room.as_deref(), Some("Accounts"));
        assert!(action.typed);
    }

    #[test]
    fn test_unique_ids() {
        let a = ActionRecord::flat("10:00", "Mail");
        let b = ActionRecord::flat("10:00", "Mail");

        assert_ne!(a.id, b.id);
    }
}
