//! Ordered, fixed-length step sequence and the navigation queries over it.
//!
//! The collection answers the two questions the controller asks on every
//! transition: "which step is open" and "is step N unlockable". The gating
//! predicate is deliberately not skip-aware: step 5 is navigable only when
//! steps 0..=4 are all completed, no shortcuts.

use super::step::Step;
use serde::{Deserialize, Serialize};

/// Ordered sequence of steps, length fixed at construction.
///
/// Invariant: after initialization exactly 0 or 1 step has `is_open == true`
/// at any time. The controller is the only mutator.
///
/// # Example
///
/// ```rust
/// use stepform::core::{Step, StepCollection};
///
/// let collection = StepCollection::new(vec![
///     Step::new_content(0, "Account", ""),
///     Step::new_content(1, "Address", ""),
/// ]);
///
/// assert_eq!(collection.len(), 2);
/// assert_eq!(collection.open_step_index(), None);
/// assert!(collection.all_prior_steps_completed(0));
/// assert!(!collection.all_prior_steps_completed(1));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StepCollection {
    steps: Vec<Step>,
}

impl StepCollection {
    /// Create a collection from the fully declared step list.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Number of steps, confirmation step included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get a step by index, `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get a step by index. Panics on out-of-range input; callers that
    /// tolerate bad indices go through `get`.
    pub fn step(&self, index: usize) -> &Step {
        &self.steps[index]
    }

    pub(crate) fn step_mut(&mut self, index: usize) -> &mut Step {
        &mut self.steps[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Step> {
        self.steps.get_mut(index)
    }

    /// Index of the unique open step, `None` if nothing is open (only
    /// observable before initialization).
    pub fn open_step_index(&self) -> Option<usize> {
        self.steps.iter().position(Step::is_open)
    }

    /// True iff every step before `target` is completed. This is the sole
    /// gate for forward navigation.
    pub fn all_prior_steps_completed(&self, target: usize) -> bool {
        self.steps[..target.min(self.steps.len())]
            .iter()
            .all(Step::is_completed)
    }

    /// Count of completed steps; this is the form's progress value.
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_completed()).count()
    }

    /// True iff at least one step is completed.
    pub fn any_completed(&self) -> bool {
        self.steps.iter().any(Step::is_completed)
    }

    /// True iff every content step is completed. Drives the synthesized
    /// completion of the confirmation step.
    pub fn all_content_steps_completed(&self) -> bool {
        self.steps
            .iter()
            .filter(|s| !s.is_confirmation())
            .all(Step::is_completed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_steps() -> StepCollection {
        StepCollection::new(vec![
            Step::new_content(0, "Account", ""),
            Step::new_content(1, "Address", ""),
            Step::new_content(2, "Payment", ""),
        ])
    }

    #[test]
    fn open_step_index_finds_unique_open_step() {
        let mut collection = three_steps();
        assert_eq!(collection.open_step_index(), None);

        collection.step_mut(1).open();
        assert_eq!(collection.open_step_index(), Some(1));
    }

    #[test]
    fn first_step_has_no_prerequisites() {
        let collection = three_steps();
        assert!(collection.all_prior_steps_completed(0));
    }

    #[test]
    fn gate_requires_all_prior_steps() {
        let mut collection = three_steps();
        assert!(!collection.all_prior_steps_completed(2));

        collection.step_mut(0).mark_as_completed();
        assert!(!collection.all_prior_steps_completed(2));

        collection.step_mut(1).mark_as_completed();
        assert!(collection.all_prior_steps_completed(2));
    }

    #[test]
    fn gate_is_not_skip_aware() {
        let mut collection = three_steps();

        // Completing a later step does not unlock anything before it.
        collection.step_mut(1).mark_as_completed();
        assert!(!collection.all_prior_steps_completed(2));
    }

    #[test]
    fn completed_count_tracks_mutations() {
        let mut collection = three_steps();
        assert_eq!(collection.completed_count(), 0);
        assert!(!collection.any_completed());

        collection.step_mut(0).mark_as_completed();
        collection.step_mut(2).mark_as_completed();
        assert_eq!(collection.completed_count(), 2);
        assert!(collection.any_completed());

        collection.step_mut(0).mark_as_uncompleted("");
        assert_eq!(collection.completed_count(), 1);
    }

    #[test]
    fn confirmation_step_is_excluded_from_content_completion() {
        let mut collection = StepCollection::new(vec![
            Step::new_content(0, "Account", ""),
            Step::new_confirmation(1, "Confirmation"),
        ]);
        assert!(!collection.all_content_steps_completed());

        collection.step_mut(0).mark_as_completed();
        assert!(collection.all_content_steps_completed());
    }

    #[test]
    #[should_panic]
    fn step_accessor_panics_out_of_range() {
        let collection = three_steps();
        let _ = collection.step(3);
    }
}
