//! Stepform: a multi-step form state machine
//!
//! Stepform manages an ordered sequence of discrete form steps, each of
//! which can be open, closed, completed, or in error, and enforces strict
//! linear progression: a step cannot be opened until every step before it
//! is completed. The crate is an embeddable state machine; rendering,
//! animation, and scrolling live behind the [`render::FormRenderer`] trait,
//! which the host implements and wires to its own event sources.
//!
//! # Core Concepts
//!
//! - **Step**: one unit of the form; content plus completion state
//! - **Gating**: step `k` is reachable only when all steps before `k` are
//!   completed; rejected navigation is silent
//! - **Confirmation step**: synthetic final "review and submit" step with
//!   completion derived from every other step
//! - **Snapshots**: serializable capture/restore of form state across
//!   process interruption
//!
//! # Example
//!
//! ```rust
//! use stepform::builder::FormBuilder;
//! use stepform::render::NullRenderer;
//! use stepform::snapshot::FormSnapshot;
//!
//! let mut form = FormBuilder::new()
//!     .step_with_subtitle("Account", "Email and password")
//!     .step("Shipping address")
//!     .build(NullRenderer)
//!     .unwrap();
//!
//! // Step 0 opens at initialization; step 1 is gated until 0 completes.
//! assert_eq!(form.open_step_index(), Some(0));
//! assert!(!form.go_to_step(1, true));
//!
//! form.mark_open_step_as_completed(true);
//! assert!(form.go_to_next_step(true));
//!
//! // Suspend and resume.
//! let snapshot = FormSnapshot::capture(&form);
//! let mut resumed = FormBuilder::new()
//!     .step_with_subtitle("Account", "Email and password")
//!     .step("Shipping address")
//!     .build(NullRenderer)
//!     .unwrap();
//! resumed.restore(&snapshot).unwrap();
//! assert_eq!(resumed.open_step_index(), Some(1));
//! ```

pub mod builder;
pub mod config;
pub mod controller;
pub mod core;
pub mod render;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{BuildError, FormBuilder, StepDescriptor};
pub use config::{FormStyle, Rgb};
pub use controller::FormController;
pub use core::{Step, StepCollection, StepKind, StepStatus};
pub use render::{ButtonKind, ContentHandle, FormRenderer, NullRenderer};
pub use snapshot::{FormSnapshot, SnapshotError};
