//! Navigation and validation driver.
//!
//! `FormController` is the imperative shell around the pure core: it owns
//! the step collection, applies the gating policy, re-derives button
//! enablement and progress after every mutation, and notifies the rendering
//! collaborator.

mod machine;

pub use machine::FormController;
