//! The form controller: navigation, validation gating, progress, completion.

use crate::config::FormStyle;
use crate::core::{NavigationEvent, NavigationLog, StepCollection};
use crate::render::{ButtonKind, FormRenderer};
use crate::snapshot::{FormSnapshot, SnapshotError};
use chrono::Utc;

/// Drives the step state machine.
///
/// All transitions are synchronous and run on the caller's thread; the
/// `&mut self` receiver makes interleaved close/open sequences
/// unrepresentable, so rapid double-invocation of [`go_to_step`] can never
/// leave two steps open.
///
/// Navigation outcomes are reported as booleans: a rejected navigation is a
/// guarded UI action, not an error, and leaves the form untouched. The only
/// things that unwind are programmer-contract violations (out-of-range
/// indices passed to the completion mutators).
///
/// [`go_to_step`]: FormController::go_to_step
///
/// # Example
///
/// ```rust
/// use stepform::builder::FormBuilder;
/// use stepform::config::FormStyle;
/// use stepform::render::NullRenderer;
///
/// let style = FormStyle {
///     include_confirmation_step: false,
///     ..FormStyle::default()
/// };
/// let mut form = FormBuilder::new()
///     .step("Account")
///     .step("Address")
///     .style(style)
///     .build(NullRenderer)
///     .unwrap();
///
/// assert_eq!(form.open_step_index(), Some(0));
/// assert!(!form.go_to_step(1, true)); // step 0 not completed yet
///
/// form.mark_open_step_as_completed(true);
/// assert!(form.go_to_step(1, true));
/// assert_eq!(form.open_step_index(), Some(1));
/// ```
pub struct FormController<R: FormRenderer> {
    steps: StepCollection,
    style: FormStyle,
    renderer: R,
    log: NavigationLog,
    completion_pending: bool,
}

impl<R: FormRenderer> FormController<R> {
    pub(crate) fn new(steps: StepCollection, style: FormStyle, renderer: R) -> Self {
        Self {
            steps,
            style,
            renderer,
            log: NavigationLog::new(),
            completion_pending: false,
        }
    }

    /// Run the initialization sequence: progress bound, navigation
    /// visibility, per-step content, then open step 0 unconditionally
    /// (no prior steps exist, so the gate is trivially satisfied).
    pub(crate) fn initialize(&mut self) {
        self.renderer.set_progress_bound(self.steps.len());

        if !self.style.display_bottom_navigation {
            self.renderer.set_bottom_navigation_visible(false);
        }

        for index in 0..self.steps.len() {
            if self.steps.step(index).is_confirmation() {
                continue;
            }
            if let Some(handle) = self.renderer.request_step_content(index) {
                self.steps.step_mut(index).attach_content(handle);
            }
        }

        self.open_step(0, false);
    }

    /// The steps of the form, confirmation step included.
    pub fn steps(&self) -> &StepCollection {
        &self.steps
    }

    pub fn style(&self) -> &FormStyle {
        &self.style
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Log of every successful navigation since construction.
    pub fn navigation_log(&self) -> &NavigationLog {
        &self.log
    }

    /// Index of the currently open step.
    pub fn open_step_index(&self) -> Option<usize> {
        self.steps.open_step_index()
    }

    /// Count of completed steps.
    pub fn progress(&self) -> usize {
        self.steps.completed_count()
    }

    /// Whether the completion callback has fired and not been cancelled.
    pub fn is_completion_pending(&self) -> bool {
        self.completion_pending
    }

    /// Navigate to `target`, closing whatever step is open.
    ///
    /// Legal iff `target` is not already open and every step before it is
    /// completed. `target == step count` is the form-completion trigger:
    /// no step opens, the open step's next action is disabled, and the
    /// completion callback fires (once; repeat attempts while completion is
    /// pending are rejected).
    ///
    /// Returns `false` on rejection with no state change. Rejection is
    /// silent by design; the caller surfaces no error.
    pub fn go_to_step(&mut self, target: usize, animate: bool) -> bool {
        if self.open_step_index() == Some(target) {
            return false;
        }
        if !self.steps.all_prior_steps_completed(target) {
            return false;
        }

        if target < self.steps.len() {
            self.open_step(target, animate);
            true
        } else if target == self.steps.len() && !self.completion_pending {
            self.complete_form();
            true
        } else {
            false
        }
    }

    /// Navigate to the step after the open one. `go_to_step` semantics,
    /// including form completion when the open step is the last.
    pub fn go_to_next_step(&mut self, animate: bool) -> bool {
        match self.open_step_index() {
            Some(open) => self.go_to_step(open + 1, animate),
            None => false,
        }
    }

    /// Navigate to the step before the open one.
    pub fn go_to_previous_step(&mut self, animate: bool) -> bool {
        match self.open_step_index() {
            Some(open) if open > 0 => self.go_to_step(open - 1, animate),
            _ => false,
        }
    }

    fn open_step(&mut self, target: usize, animate: bool) {
        let closed = self.open_step_index();
        if let Some(current) = closed {
            self.steps.step_mut(current).close();
            if !self.steps.step(current).is_confirmation() {
                self.renderer.render_step_closed(current, animate);
            }
        }

        self.steps.step_mut(target).open();
        self.log = self.log.record(NavigationEvent {
            from: closed,
            to: target,
            timestamp: Utc::now(),
        });

        if self.steps.step(target).is_confirmation() {
            // The confirmation step has no collaborator content; opening it
            // re-derives its synthesized completion instead of notifying.
            self.sync_confirmation_step();
            self.refresh_progress();
        } else {
            self.renderer.render_step_opened(target, animate);
        }

        self.update_navigation_buttons();
        self.renderer.scroll_to_step(target, animate);
    }

    /// Mark a step completed and re-derive button enablement and progress.
    ///
    /// May be called on a non-open step without triggering navigation.
    /// The confirmation step's completion stays synthesized: marking its
    /// index directly mutates nothing and emits no indicator.
    /// Panics if `index` is out of range; this accessor is a programmer
    /// contract, not a user-input guard.
    pub fn mark_step_as_completed(&mut self, index: usize, animate: bool) {
        if !self.steps.step(index).is_confirmation() {
            self.steps.step_mut(index).mark_as_completed();
            self.renderer
                .render_completion_indicator(index, true, None, animate);
        }
        self.after_completion_change();
    }

    /// Mark a step uncompleted with a validation message (empty = no
    /// visible error, just incomplete). As with completion, the
    /// confirmation step's index is a no-op.
    /// Panics if `index` is out of range.
    pub fn mark_step_as_uncompleted(
        &mut self,
        index: usize,
        error_message: impl Into<String>,
        animate: bool,
    ) {
        if !self.steps.step(index).is_confirmation() {
            let message = error_message.into();
            self.steps.step_mut(index).mark_as_uncompleted(message.clone());
            self.renderer
                .render_completion_indicator(index, false, Some(&message), animate);
        }
        self.after_completion_change();
    }

    /// Mark the open step completed. No-op when nothing is open.
    pub fn mark_open_step_as_completed(&mut self, animate: bool) {
        if let Some(open) = self.open_step_index() {
            self.mark_step_as_completed(open, animate);
        }
    }

    /// Mark the open step uncompleted. No-op when nothing is open.
    pub fn mark_open_step_as_uncompleted(
        &mut self,
        error_message: impl Into<String>,
        animate: bool,
    ) {
        if let Some(open) = self.open_step_index() {
            self.mark_step_as_uncompleted(open, error_message, animate);
        }
    }

    /// Whether the step at `index` is completed. Panics if out of range.
    pub fn is_step_completed(&self, index: usize) -> bool {
        self.steps.step(index).is_completed()
    }

    pub fn is_open_step_completed(&self) -> bool {
        self.open_step_index()
            .is_some_and(|open| self.steps.step(open).is_completed())
    }

    pub fn is_any_step_completed(&self) -> bool {
        self.steps.any_completed()
    }

    /// Replace a step's subtitle. Out-of-range indices are silently
    /// ignored; subtitle updates are cosmetic.
    pub fn update_step_subtitle(&mut self, index: usize, subtitle: impl Into<String>) {
        if let Some(step) = self.steps.get_mut(index) {
            let subtitle = subtitle.into();
            step.update_subtitle(subtitle.clone());
            self.renderer.render_subtitle(index, &subtitle);
        }
    }

    /// Clear a step's subtitle.
    pub fn remove_step_subtitle(&mut self, index: usize) {
        self.update_step_subtitle(index, "");
    }

    /// Replace the open step's subtitle. No-op when nothing is open.
    pub fn update_open_step_subtitle(&mut self, subtitle: impl Into<String>) {
        if let Some(open) = self.open_step_index() {
            self.update_step_subtitle(open, subtitle);
        }
    }

    pub fn remove_open_step_subtitle(&mut self) {
        self.update_open_step_subtitle("");
    }

    /// Compensate for a failed asynchronous completion handler: re-enable
    /// the open step's next action after the completion callback already
    /// fired. The callback itself is not retractable.
    pub fn cancel_form_completion(&mut self) {
        if let Some(open) = self.open_step_index() {
            self.steps.step_mut(open).enable_next_action();
            self.renderer
                .render_button_enabled(ButtonKind::StepNext(open), true);
        }
        self.completion_pending = false;
    }

    /// Restore controller state from a snapshot.
    ///
    /// Applies subtitles first, then completion flags with their error
    /// messages, then navigates to the saved open index, then re-derives
    /// button enablement and progress. Never animates.
    ///
    /// Mismatched array lengths are a fatal configuration error; the form
    /// is left untouched in that case.
    pub fn restore(&mut self, snapshot: &FormSnapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;
        if snapshot.completed.len() != self.steps.len() {
            return Err(SnapshotError::LengthMismatch {
                expected: self.steps.len(),
                found: snapshot.completed.len(),
            });
        }

        for index in 0..self.steps.len() {
            self.update_step_subtitle(index, snapshot.subtitles[index].clone());

            let completed = snapshot.completed[index];
            let message = snapshot.error_messages[index].clone();
            self.steps
                .step_mut(index)
                .restore_completion(completed, message);
            if !self.steps.step(index).is_confirmation() {
                self.renderer.render_completion_indicator(
                    index,
                    completed,
                    self.steps.step(index).error_message(),
                    false,
                );
            }
        }
        self.sync_confirmation_step();

        if let Some(open) = snapshot.open_step_index {
            self.go_to_step(open, false);
        }

        self.update_navigation_buttons();
        self.refresh_progress();
        Ok(())
    }

    fn after_completion_change(&mut self) {
        self.sync_confirmation_step();
        self.update_navigation_buttons();
        self.refresh_progress();
    }

    /// The confirmation step's completion is synthesized from every content
    /// step being completed; it is never independently settable.
    fn sync_confirmation_step(&mut self) {
        let last = self.steps.len() - 1;
        if !self.steps.step(last).is_confirmation() {
            return;
        }
        let synthesized = self.steps.all_content_steps_completed();
        if synthesized != self.steps.step(last).is_completed() {
            self.steps
                .step_mut(last)
                .restore_completion(synthesized, None);
        }
    }

    /// Previous enabled iff a step before the open one exists; next enabled
    /// iff the open step is completed and is not the last.
    fn update_navigation_buttons(&mut self) {
        let Some(open) = self.open_step_index() else {
            return;
        };

        let previous_enabled = open > 0;
        let next_enabled =
            self.steps.step(open).is_completed() && open + 1 < self.steps.len();

        self.renderer
            .render_button_enabled(ButtonKind::Previous, previous_enabled);
        self.renderer
            .render_button_enabled(ButtonKind::Next, next_enabled);
    }

    fn refresh_progress(&mut self) {
        // The original never rendered a progress of zero, which meant the
        // indicator could not visually reset; treated here as a bug and
        // corrected by always reporting the count.
        let progress = self.steps.completed_count();
        self.renderer.render_progress(progress);
    }

    fn complete_form(&mut self) {
        if let Some(open) = self.open_step_index() {
            self.steps.step_mut(open).disable_next_action();
            self.renderer
                .render_button_enabled(ButtonKind::StepNext(open), false);
        }
        self.completion_pending = true;
        self.renderer.on_form_completed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FormBuilder;
    use crate::render::{ContentHandle, NullRenderer};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Renderer that records every notification for assertions.
    #[derive(Clone, Default)]
    struct RecordingRenderer {
        calls: Rc<RefCell<Vec<String>>>,
        completed_count: Rc<RefCell<usize>>,
    }

    impl RecordingRenderer {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn count(&self, prefix: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|c| c.starts_with(prefix))
                .count()
        }
    }

    impl FormRenderer for RecordingRenderer {
        fn render_step_opened(&mut self, index: usize, _animate: bool) {
            self.calls.borrow_mut().push(format!("opened:{index}"));
        }

        fn render_step_closed(&mut self, index: usize, _animate: bool) {
            self.calls.borrow_mut().push(format!("closed:{index}"));
        }

        fn request_step_content(&mut self, index: usize) -> Option<ContentHandle> {
            self.calls.borrow_mut().push(format!("content:{index}"));
            Some(ContentHandle(index as u64 + 100))
        }

        fn on_form_completed(&mut self) {
            *self.completed_count.borrow_mut() += 1;
            self.calls.borrow_mut().push("form_completed".to_string());
        }

        fn set_progress_bound(&mut self, bound: usize) {
            self.calls.borrow_mut().push(format!("bound:{bound}"));
        }

        fn render_progress(&mut self, completed: usize) {
            self.calls.borrow_mut().push(format!("progress:{completed}"));
        }

        fn render_subtitle(&mut self, index: usize, text: &str) {
            self.calls.borrow_mut().push(format!("subtitle:{index}:{text}"));
        }

        fn render_button_enabled(&mut self, button: ButtonKind, enabled: bool) {
            self.calls
                .borrow_mut()
                .push(format!("button:{button:?}:{enabled}"));
        }

        fn render_completion_indicator(
            &mut self,
            index: usize,
            completed: bool,
            _error_message: Option<&str>,
            _animate: bool,
        ) {
            self.calls
                .borrow_mut()
                .push(format!("indicator:{index}:{completed}"));
        }

        fn scroll_to_step(&mut self, index: usize, _smooth: bool) {
            self.calls.borrow_mut().push(format!("scroll:{index}"));
        }

        fn set_bottom_navigation_visible(&mut self, visible: bool) {
            self.calls.borrow_mut().push(format!("bottom_nav:{visible}"));
        }
    }

    fn plain_form(titles: &[&str]) -> FormController<RecordingRenderer> {
        let mut builder = FormBuilder::new().style(FormStyle {
            include_confirmation_step: false,
            ..FormStyle::default()
        });
        for title in titles {
            builder = builder.step(*title);
        }
        builder.build(RecordingRenderer::default()).unwrap()
    }

    #[test]
    fn initialization_opens_first_step_only() {
        let form = plain_form(&["A", "B", "C"]);

        assert_eq!(form.open_step_index(), Some(0));
        assert!(form.steps().step(0).is_open());
        assert!(!form.steps().step(1).is_open());
        assert!(!form.steps().step(2).is_open());
    }

    #[test]
    fn initialization_requests_content_and_sets_bound() {
        let form = plain_form(&["A", "B"]);
        let calls = form.renderer().calls();

        assert!(calls.contains(&"bound:2".to_string()));
        assert!(calls.contains(&"content:0".to_string()));
        assert!(calls.contains(&"content:1".to_string()));
        assert_eq!(form.steps().step(0).content(), Some(ContentHandle(100)));
    }

    #[test]
    fn hidden_bottom_navigation_is_notified_once() {
        let form = FormBuilder::new()
            .step("A")
            .style(FormStyle {
                include_confirmation_step: false,
                display_bottom_navigation: false,
                ..FormStyle::default()
            })
            .build(RecordingRenderer::default())
            .unwrap();

        assert_eq!(form.renderer().count("bottom_nav:false"), 1);
    }

    #[test]
    fn navigation_is_gated_on_prior_completion() {
        let mut form = plain_form(&["A", "B", "C"]);

        assert!(!form.go_to_step(1, true));
        assert!(!form.go_to_step(2, true));
        assert_eq!(form.open_step_index(), Some(0));

        form.mark_step_as_completed(0, true);
        assert!(form.go_to_step(1, true));
        assert_eq!(form.open_step_index(), Some(1));

        // Jumping to 2 still requires 1 to be completed.
        assert!(!form.go_to_step(2, true));
    }

    #[test]
    fn navigating_to_open_step_is_rejected() {
        let mut form = plain_form(&["A", "B"]);

        assert!(!form.go_to_step(0, true));
        assert_eq!(form.renderer().count("closed:"), 0);
    }

    #[test]
    fn successful_navigation_fires_close_then_open() {
        let mut form = plain_form(&["A", "B"]);
        form.mark_step_as_completed(0, true);
        form.go_to_step(1, true);

        let calls = form.renderer().calls();
        let closed = calls.iter().position(|c| c == "closed:0").unwrap();
        let opened = calls.iter().position(|c| c == "opened:1").unwrap();
        assert!(closed < opened);
        assert!(calls.contains(&"scroll:1".to_string()));
    }

    #[test]
    fn next_and_previous_follow_the_open_step() {
        let mut form = plain_form(&["A", "B", "C"]);

        assert!(!form.go_to_previous_step(true));

        form.mark_open_step_as_completed(true);
        assert!(form.go_to_next_step(true));
        assert_eq!(form.open_step_index(), Some(1));

        assert!(form.go_to_previous_step(true));
        assert_eq!(form.open_step_index(), Some(0));
    }

    #[test]
    fn button_enablement_follows_policy() {
        let mut form = plain_form(&["A", "B"]);

        form.mark_step_as_completed(0, true);
        let calls = form.renderer().calls();
        assert!(calls.contains(&"button:Previous:false".to_string()));
        assert!(calls.contains(&"button:Next:true".to_string()));

        form.go_to_step(1, true);
        let calls = form.renderer().calls();
        assert!(calls.contains(&"button:Previous:true".to_string()));
        // Step 1 is last: next stays disabled even once completed.
        form.mark_step_as_completed(1, true);
        assert_eq!(
            form.renderer().calls().last().unwrap(),
            &"progress:2".to_string()
        );
        assert!(!form
            .renderer()
            .calls()
            .iter()
            .rev()
            .take(3)
            .any(|c| c == "button:Next:true"));
    }

    #[test]
    fn progress_renders_every_count_including_zero() {
        let mut form = plain_form(&["A", "B"]);

        form.mark_step_as_completed(0, true);
        form.mark_step_as_uncompleted(0, "nope", true);

        let calls = form.renderer().calls();
        assert!(calls.contains(&"progress:1".to_string()));
        assert!(calls.contains(&"progress:0".to_string()));
    }

    #[test]
    fn completion_round_trip_restores_error_message() {
        let mut form = plain_form(&["A"]);

        form.mark_step_as_completed(0, true);
        form.mark_step_as_uncompleted(0, "Field required", true);

        assert!(!form.is_step_completed(0));
        assert_eq!(
            form.steps().step(0).error_message(),
            Some("Field required")
        );
    }

    #[test]
    fn marking_non_open_step_does_not_navigate() {
        let mut form = plain_form(&["A", "B", "C"]);

        form.mark_step_as_completed(2, false);

        assert_eq!(form.open_step_index(), Some(0));
        assert!(form.is_step_completed(2));
    }

    #[test]
    #[should_panic]
    fn marking_out_of_range_step_panics() {
        let mut form = plain_form(&["A"]);
        form.mark_step_as_completed(5, false);
    }

    #[test]
    fn subtitle_updates_out_of_range_are_ignored() {
        let mut form = plain_form(&["A"]);

        form.update_step_subtitle(7, "ghost");

        assert_eq!(form.renderer().count("subtitle:7"), 0);
    }

    #[test]
    fn subtitle_update_and_removal_notify_renderer() {
        let mut form = plain_form(&["A", "B"]);

        form.update_open_step_subtitle("john@example.com");
        assert_eq!(form.steps().step(0).subtitle(), "john@example.com");

        form.remove_step_subtitle(0);
        assert_eq!(form.steps().step(0).subtitle(), "");

        let calls = form.renderer().calls();
        assert!(calls.contains(&"subtitle:0:john@example.com".to_string()));
        assert!(calls.contains(&"subtitle:0:".to_string()));
    }

    #[test]
    fn advancing_past_last_step_completes_the_form() {
        let mut form = plain_form(&["A", "B"]);
        form.mark_step_as_completed(0, true);
        form.go_to_step(1, true);
        form.mark_step_as_completed(1, true);

        assert!(form.go_to_step(2, true));

        assert_eq!(*form.renderer().completed_count.borrow(), 1);
        assert_eq!(form.open_step_index(), Some(1));
        assert!(form.is_completion_pending());
        assert!(!form.steps().step(1).is_next_action_enabled());
    }

    #[test]
    fn completion_requires_every_step_completed() {
        let mut form = plain_form(&["A", "B"]);
        form.mark_step_as_completed(0, true);
        form.go_to_step(1, true);

        assert!(!form.go_to_step(2, true));
        assert_eq!(*form.renderer().completed_count.borrow(), 0);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut form = plain_form(&["A"]);
        form.mark_step_as_completed(0, true);

        assert!(form.go_to_step(1, true));
        assert!(!form.go_to_step(1, true));

        assert_eq!(*form.renderer().completed_count.borrow(), 1);
    }

    #[test]
    fn cancel_form_completion_re_enables_next_action() {
        let mut form = plain_form(&["A"]);
        form.mark_step_as_completed(0, true);
        form.go_to_step(1, true);

        form.cancel_form_completion();

        assert!(!form.is_completion_pending());
        assert!(form.steps().step(0).is_next_action_enabled());
        assert!(form
            .renderer()
            .calls()
            .contains(&"button:StepNext(0):true".to_string()));

        // The flow can be re-triggered after cancellation.
        assert!(form.go_to_step(1, true));
        assert_eq!(*form.renderer().completed_count.borrow(), 2);
    }

    #[test]
    fn confirmation_step_is_appended_and_suppressed() {
        let mut form = FormBuilder::new()
            .step("A")
            .build(RecordingRenderer::default())
            .unwrap();

        assert_eq!(form.steps().len(), 2);
        assert!(form.steps().step(1).is_confirmation());
        assert_eq!(form.steps().step(1).title(), "Confirmation");
        // No content requested for the confirmation step.
        assert_eq!(form.renderer().count("content:1"), 0);

        form.mark_step_as_completed(0, true);
        assert!(form.go_to_step(1, true));

        // Opening the confirmation step fires no opened notification.
        assert_eq!(form.renderer().count("opened:1"), 0);
        assert!(form.steps().step(1).is_open());
    }

    #[test]
    fn confirmation_completion_is_synthesized() {
        let mut form = FormBuilder::new()
            .step("A")
            .step("B")
            .build(RecordingRenderer::default())
            .unwrap();

        form.mark_step_as_completed(0, true);
        assert!(!form.is_step_completed(2));

        form.go_to_step(1, true);
        form.mark_step_as_completed(1, true);
        assert!(form.is_step_completed(2));

        // Uncompleting a content step retracts the synthesized completion.
        form.mark_step_as_uncompleted(0, "changed", true);
        assert!(!form.is_step_completed(2));
    }

    #[test]
    fn marking_confirmation_step_directly_is_inert() {
        let mut form = FormBuilder::new()
            .step("A")
            .build(RecordingRenderer::default())
            .unwrap();
        assert!(form.steps().step(1).is_confirmation());

        // The synthesized flag stays false and the renderer hears nothing
        // it would have to retract.
        form.mark_step_as_completed(1, true);
        assert!(!form.is_step_completed(1));
        assert_eq!(form.renderer().count("indicator:1"), 0);

        form.mark_step_as_completed(0, true);
        assert!(form.is_step_completed(1));
        assert_eq!(form.renderer().count("indicator:1"), 0);

        // Uncompleting it directly is equally inert.
        form.mark_step_as_uncompleted(1, "not yours to set", true);
        assert!(form.is_step_completed(1));
        assert_eq!(form.steps().step(1).error_message(), None);
        assert_eq!(form.renderer().count("indicator:1"), 0);
    }

    #[test]
    fn double_navigation_to_one_target_keeps_one_step_open() {
        let mut form = plain_form(&["A", "B"]);
        form.mark_step_as_completed(0, true);

        assert!(form.go_to_step(1, true));
        assert!(!form.go_to_step(1, true));

        assert_eq!(form.steps().iter().filter(|s| s.is_open()).count(), 1);
        assert_eq!(form.renderer().count("opened:1"), 1);
        assert_eq!(form.renderer().count("closed:0"), 1);
    }

    #[test]
    fn navigation_log_records_successful_moves_only() {
        let mut form = plain_form(&["A", "B"]);

        form.go_to_step(1, true); // rejected
        form.mark_step_as_completed(0, true);
        form.go_to_step(1, true);

        assert_eq!(form.navigation_log().path(), vec![0, 1]);
        assert_eq!(form.navigation_log().events()[1].from, Some(0));
    }

    #[test]
    fn null_renderer_form_still_walks_the_machine() {
        let mut form = FormBuilder::new()
            .step("A")
            .step("B")
            .style(FormStyle {
                include_confirmation_step: false,
                ..FormStyle::default()
            })
            .build(NullRenderer)
            .unwrap();

        form.mark_open_step_as_completed(false);
        assert!(form.go_to_next_step(false));
        assert_eq!(form.open_step_index(), Some(1));
        assert_eq!(form.progress(), 1);
    }
}
