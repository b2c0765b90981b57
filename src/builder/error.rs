//! Build errors for form construction.

use thiserror::Error;

/// Errors that can occur when building a form.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No steps declared. Add at least one step before .build()")]
    NoSteps,

    #[error("Step {index} has an empty title")]
    EmptyStepTitle { index: usize },
}
