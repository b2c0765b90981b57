//! Core step model and navigation queries.
//!
//! This module contains the pure data side of the form:
//! - Step definitions and per-step lifecycle state
//! - The ordered step collection and its gating predicate
//! - Immutable navigation logging
//!
//! Nothing here talks to the rendering collaborator; all notification
//! side effects live in the controller.

mod collection;
mod log;
mod step;

pub use collection::StepCollection;
pub use log::{NavigationEvent, NavigationLog};
pub use step::{Step, StepKind, StepStatus};
