//! # Activity Model
//!
//! The "timeline bible" crate - data types for observed user activity inside
//! layered software environments. This crate is the single source of truth for
//! what the tracker records and does not contain any narrative logic.
//!
//! Work inside SaaS applications has layers, and the model keeps all three:
//!
//! - **Building**: the top-level application or environment
//! - **Apartment**: a specific record inside a building (a customer account)
//! - **Room**: a section or view inside a building (an activity log)
//!
//! Actions that only carry a flat application/category label are first-class
//! too; absent tiers simply stay unset.

pub mod action;
pub mod context;
pub mod workflow;

pub use action::*;
pub use context::*;
pub use workflow::*;
