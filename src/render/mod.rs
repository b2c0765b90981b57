//! The rendering collaborator boundary.
//!
//! The core is an embeddable state machine; everything visual (layout,
//! animation, scrolling, theming) lives behind the `FormRenderer` trait.
//! The controller calls into it after every transition; the collaborator
//! owns all event wiring and calls the controller's transition methods back
//! in response to user input.
//!
//! All notification methods default to no-ops so a renderer only implements
//! what it draws. `NullRenderer` is the fully headless implementation used
//! in tests and in hosts that drive the machine without a UI.

use serde::{Deserialize, Serialize};

/// Opaque handle to a collaborator-supplied step content body.
///
/// The core never inspects it; it only stores the handle on the step so the
/// collaborator can find its own content again.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ContentHandle(pub u64);

/// Which button an enablement notification refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonKind {
    /// The bottom-navigation "previous" button.
    Previous,
    /// The bottom-navigation "next" button.
    Next,
    /// The per-step "next" button of the given step.
    StepNext(usize),
}

/// Receiver for all core-to-collaborator notifications.
///
/// Open/close notifications are suppressed for the confirmation step; the
/// collaborator never renders externally supplied content for it.
pub trait FormRenderer {
    /// A step was opened. Not fired for the confirmation step.
    fn render_step_opened(&mut self, _index: usize, _animate: bool) {}

    /// A step was closed. Not fired for the confirmation step.
    fn render_step_closed(&mut self, _index: usize, _animate: bool) {}

    /// Supply the content body for a content step. Called once per step
    /// during initialization; never called for the confirmation step.
    fn request_step_content(&mut self, _index: usize) -> Option<ContentHandle> {
        None
    }

    /// Navigation advanced past the last step; the form is complete.
    fn on_form_completed(&mut self) {}

    /// Upper bound for the progress indicator (the step count).
    fn set_progress_bound(&mut self, _bound: usize) {}

    /// Current count of completed steps.
    fn render_progress(&mut self, _completed: usize) {}

    /// A step's subtitle changed. Empty text means no subtitle.
    fn render_subtitle(&mut self, _index: usize, _text: &str) {}

    /// A button's enabled state changed.
    fn render_button_enabled(&mut self, _button: ButtonKind, _enabled: bool) {}

    /// A step's completion indicator changed. Carries the error message to
    /// show when uncompleted (`Some("")` means incomplete without a visible
    /// error).
    fn render_completion_indicator(
        &mut self,
        _index: usize,
        _completed: bool,
        _error_message: Option<&str>,
        _animate: bool,
    ) {
    }

    /// Bring a step into view.
    fn scroll_to_step(&mut self, _index: usize, _smooth: bool) {}

    /// Show or hide the bottom previous/next navigation bar.
    fn set_bottom_navigation_visible(&mut self, _visible: bool) {}
}

/// Renderer that draws nothing. Useful for tests and headless hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl FormRenderer for NullRenderer {}
