//! One-shot deferred tasks drained by the event loop.
//!
//! Fire-and-forget timers for the reveal marker and the post-scroll focus,
//! modeled as queue entries with a due instant and drained inside the
//! single-threaded loop. Tasks are never cancelled; the executors re-check
//! that their target still exists when they finally run.

use std::time::{Duration, Instant};

use crate::contact::FormField;

/// Longest deferral the page ever schedules. Kept well under the point where
/// a user would notice a stale callback firing.
pub const MAX_DEFER: Duration = Duration::from_millis(1_500);

/// Work a timer was armed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredTask {
    /// Apply the visible marker to a section that crossed the reveal threshold.
    RevealSection { id: String },
    /// Move focus into a contact form field.
    FocusFormField { field: FormField },
}

#[derive(Debug)]
struct Entry {
    due: Instant,
    task: DeferredTask,
}

/// FIFO of armed one-shot timers. Insertion order breaks ties between entries
/// due at the same instant.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    entries: Vec<Entry>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, task: DeferredTask) {
        let delay = delay.min(MAX_DEFER);
        self.entries.push(Entry {
            due: now + delay,
            task,
        });
    }

    /// True when a matching reveal is already armed; prevents re-arming a
    /// timer for a section every scroll tick.
    pub fn has_reveal_for(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| {
            matches!(&entry.task, DeferredTask::RevealSection { id: armed } if armed == id)
        })
    }

    /// Remove and return every task whose due instant has passed.
    pub fn drain_due(&mut self, now: Instant) -> Vec<DeferredTask> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                due.push(entry.task);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;
        due
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Instant of the soonest pending entry, for loop poll timeouts.
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }
}
