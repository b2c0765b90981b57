//! Step model and per-step lifecycle state.
//!
//! A step is one unit of the form: a title, an optional subtitle, opaque
//! content supplied by the rendering collaborator, and the completion/open
//! sub-state the controller drives. All mutation goes through
//! `FormController` transition methods; the methods here are plain field
//! mutations with the completed/error exclusivity invariant baked in.

use crate::render::ContentHandle;
use serde::{Deserialize, Serialize};

/// Kind of step.
///
/// The confirmation step is a synthetic terminal "review and submit" step:
/// it has no externally supplied content, is always last, and its completion
/// is derived from every other step being completed rather than being
/// independently settable. Open/close notifications to the rendering
/// collaborator are suppressed for it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StepKind {
    /// A regular step whose content the rendering collaborator supplies.
    Content,
    /// The synthetic terminal review step.
    Confirmation,
}

/// The four per-step machine states, derived from the open/completed flags.
///
/// # Example
///
/// ```rust
/// use stepform::core::{Step, StepStatus};
///
/// let mut step = Step::new_content(0, "Account", "");
/// assert_eq!(step.status(), StepStatus::ClosedIncomplete);
///
/// step.open();
/// step.mark_as_completed();
/// assert_eq!(step.status(), StepStatus::OpenCompleted);
/// assert_eq!(step.status().name(), "OpenCompleted");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StepStatus {
    ClosedIncomplete,
    ClosedCompleted,
    OpenIncomplete,
    OpenCompleted,
}

impl StepStatus {
    /// Get the status name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::ClosedIncomplete => "ClosedIncomplete",
            Self::ClosedCompleted => "ClosedCompleted",
            Self::OpenIncomplete => "OpenIncomplete",
            Self::OpenCompleted => "OpenCompleted",
        }
    }
}

/// A single step of the form.
///
/// Invariant: `is_completed` and the error message are mutually exclusive.
/// `mark_as_completed` clears any error message; `mark_as_uncompleted`
/// clears the completed flag and stores the message (which may be empty,
/// meaning "incomplete, but nothing to show").
///
/// # Example
///
/// ```rust
/// use stepform::core::Step;
///
/// let mut step = Step::new_content(0, "Shipping address", "Where to deliver");
///
/// step.mark_as_uncompleted("Postal code is required");
/// assert!(!step.is_completed());
/// assert_eq!(step.error_message(), Some("Postal code is required"));
///
/// step.mark_as_completed();
/// assert!(step.is_completed());
/// assert_eq!(step.error_message(), None);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Step {
    /// 0-based position in the form, immutable after construction.
    index: usize,

    /// Content step or synthetic confirmation step.
    kind: StepKind,

    /// Header title.
    title: String,

    /// Mutable subtitle; empty string means absent.
    subtitle: String,

    /// Whether this step is the one currently expanded.
    open: bool,

    /// Whether this step's content has been validated as complete.
    completed: bool,

    /// Last reported validation failure; `None` while completed or before
    /// any failure was reported.
    error_message: Option<String>,

    /// Opaque handle to the collaborator-supplied content body.
    content: Option<ContentHandle>,

    /// Whether the step's own "next" action is currently enabled. Only the
    /// form-completion flow toggles this off.
    next_enabled: bool,
}

impl Step {
    /// Create a content step.
    pub fn new_content(
        index: usize,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self::new(index, StepKind::Content, title, subtitle)
    }

    /// Create the synthetic confirmation step.
    pub fn new_confirmation(index: usize, title: impl Into<String>) -> Self {
        Self::new(index, StepKind::Confirmation, title, "")
    }

    fn new(
        index: usize,
        kind: StepKind,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            index,
            kind,
            title: title.into(),
            subtitle: subtitle.into(),
            open: false,
            completed: false,
            error_message: None,
            content: None,
            next_enabled: true,
        }
    }

    /// 0-based position in the form.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn is_confirmation(&self) -> bool {
        self.kind == StepKind::Confirmation
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current subtitle; empty string means no subtitle.
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Last reported validation failure, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Derive the per-step machine state from the open/completed flags.
    pub fn status(&self) -> StepStatus {
        match (self.open, self.completed) {
            (false, false) => StepStatus::ClosedIncomplete,
            (false, true) => StepStatus::ClosedCompleted,
            (true, false) => StepStatus::OpenIncomplete,
            (true, true) => StepStatus::OpenCompleted,
        }
    }

    /// Mark the step completed, clearing any error message.
    pub fn mark_as_completed(&mut self) {
        self.completed = true;
        self.error_message = None;
    }

    /// Mark the step uncompleted, storing the validation message.
    ///
    /// An empty message means "incomplete without a visible error".
    pub fn mark_as_uncompleted(&mut self, error_message: impl Into<String>) {
        self.completed = false;
        self.error_message = Some(error_message.into());
    }

    /// Set both completion fields at once from persisted state. Bypasses
    /// the notification path; the controller re-derives everything after.
    pub(crate) fn restore_completion(&mut self, completed: bool, error_message: Option<String>) {
        self.completed = completed;
        self.error_message = if completed { None } else { error_message };
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Replace the subtitle. Pure mutation, independent of completion state.
    pub fn update_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }

    /// Attach the collaborator-supplied content handle.
    pub(crate) fn attach_content(&mut self, content: ContentHandle) {
        self.content = Some(content);
    }

    /// Opaque content handle, if one was requested at initialization.
    pub fn content(&self) -> Option<ContentHandle> {
        self.content
    }

    pub fn is_next_action_enabled(&self) -> bool {
        self.next_enabled
    }

    pub(crate) fn disable_next_action(&mut self) {
        self.next_enabled = false;
    }

    pub(crate) fn enable_next_action(&mut self) {
        self.next_enabled = true;
    }
}
