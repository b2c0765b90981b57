//! Builder for constructing form controllers.

use crate::builder::error::BuildError;
use crate::config::FormStyle;
use crate::controller::FormController;
use crate::core::{Step, StepCollection};
use crate::render::FormRenderer;
use serde::{Deserialize, Serialize};

/// Caller-supplied declaration of one step.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StepDescriptor {
    pub title: String,
    /// Empty string means no subtitle.
    pub subtitle: String,
}

impl StepDescriptor {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Builder for constructing form controllers with a fluent API.
///
/// Declares the step sequence and style, validates them, appends the
/// synthetic confirmation step when configured, and runs the controller's
/// initialization sequence so the returned form already has step 0 open.
///
/// # Example
///
/// ```rust
/// use stepform::builder::FormBuilder;
/// use stepform::render::NullRenderer;
///
/// let form = FormBuilder::new()
///     .step("Account")
///     .step_with_subtitle("Address", "Where to deliver")
///     .build(NullRenderer)
///     .unwrap();
///
/// // Two declared steps plus the confirmation step.
/// assert_eq!(form.steps().len(), 3);
/// assert_eq!(form.open_step_index(), Some(0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormBuilder {
    steps: Vec<StepDescriptor>,
    style: FormStyle,
}

impl FormBuilder {
    /// Create a new builder with the default style.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            style: FormStyle::default(),
        }
    }

    /// Append a step with no subtitle.
    pub fn step(mut self, title: impl Into<String>) -> Self {
        self.steps.push(StepDescriptor::new(title, ""));
        self
    }

    /// Append a step with a subtitle.
    pub fn step_with_subtitle(
        mut self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        self.steps.push(StepDescriptor::new(title, subtitle));
        self
    }

    /// Append multiple pre-built step declarations.
    pub fn steps(mut self, descriptors: impl IntoIterator<Item = StepDescriptor>) -> Self {
        self.steps.extend(descriptors);
        self
    }

    /// Set the style (optional; defaults otherwise).
    pub fn style(mut self, style: FormStyle) -> Self {
        self.style = style;
        self
    }

    /// Build and initialize the form.
    /// Returns an error if no steps were declared or a title is empty.
    pub fn build<R: FormRenderer>(self, renderer: R) -> Result<FormController<R>, BuildError> {
        if self.steps.is_empty() {
            return Err(BuildError::NoSteps);
        }
        if let Some(index) = self.steps.iter().position(|d| d.title.is_empty()) {
            return Err(BuildError::EmptyStepTitle { index });
        }

        let mut steps: Vec<Step> = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, d)| Step::new_content(index, d.title.clone(), d.subtitle.clone()))
            .collect();

        if self.style.include_confirmation_step {
            steps.push(Step::new_confirmation(
                steps.len(),
                self.style.confirmation_step_title.clone(),
            ));
        }

        let mut controller =
            FormController::new(StepCollection::new(steps), self.style, renderer);
        controller.initialize();
        Ok(controller)
    }
}
