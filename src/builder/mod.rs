//! Builder API for ergonomic form construction.
//!
//! This module provides a fluent builder and a declaration macro for
//! creating forms with minimal boilerplate while keeping validation at
//! build time.

pub mod error;
pub mod form;
pub mod macros;

pub use error::BuildError;
pub use form::{FormBuilder, StepDescriptor};
