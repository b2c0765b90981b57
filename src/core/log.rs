//! Navigation event log.
//!
//! Immutable record of successful step openings, useful for diagnostics and
//! for auditing how a user moved through the form. `record` returns a new
//! log rather than mutating in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful navigation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NavigationEvent {
    /// The step that was open before the move, `None` for the initial open.
    pub from: Option<usize>,
    /// The step that was opened.
    pub to: usize,
    /// When the navigation occurred.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of navigation events.
///
/// # Example
///
/// ```rust
/// use stepform::core::{NavigationEvent, NavigationLog};
/// use chrono::Utc;
///
/// let log = NavigationLog::new();
/// let log = log.record(NavigationEvent {
///     from: None,
///     to: 0,
///     timestamp: Utc::now(),
/// });
/// let log = log.record(NavigationEvent {
///     from: Some(0),
///     to: 1,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.path(), vec![0, 1]);
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct NavigationLog {
    events: Vec<NavigationEvent>,
}

impl NavigationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Record an event, returning a new log. The original is unchanged.
    pub fn record(&self, event: NavigationEvent) -> Self {
        let mut events = self.events.clone();
        events.push(event);
        Self { events }
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[NavigationEvent] {
        &self.events
    }

    /// The sequence of step indices opened, in order.
    pub fn path(&self) -> Vec<usize> {
        self.events.iter().map(|e| e.to).collect()
    }

    /// Wall-clock span between the first and last event, `None` while empty.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.events.first()?;
        let last = self.events.last()?;
        (last.timestamp - first.timestamp).to_std().ok()
    }
}
