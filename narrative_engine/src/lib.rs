//! # Narrative Engine (Waymark)
//!
//! The deterministic context-narrative engine. It consumes a
//! [`activity_model::NarrativeContext`] assembled by collaborators and
//! synthesizes a three-part narrative: a look-back at the last meaningful
//! context shift, a present-location statement, and 2-3 forecasted next steps.
//!
//! ## Core Components
//!
//! - **location**: collapses the building/apartment/room hierarchy and flat
//!   app labels into one resolved variant
//! - **narrator**: shift detection, presence description, and H/P/F compilation
//! - **planner**: merges declared loop forecasts with statistical predictions
//! - **prompt**: renders the same facts as a payload for an external text
//!   generator, and enforces the shape of whatever comes back
//!
//! ## Design Philosophy
//!
//! - **Pure**: output is a function of the input context alone; no I/O, no
//!   shared mutable state, no entitlement awareness
//! - **Aligned paths**: the local narrative and the remote prompt payload are
//!   derived from identical facts, so both paths describe the world identically
//! - **Defined edges**: input-shape edge cases terminate in defined strings,
//!   never in errors

pub mod location;
pub mod narrator;
pub mod planner;
pub mod prompt;

pub use location::*;
pub use narrator::*;
pub use planner::*;
pub use prompt::*;
