//! Filtering and aggregate value types for task queries.

use super::{Priority, Task};
use serde::Serialize;

/// Equality filter over tasks. Supplied criteria are combined with AND; the
/// default filter matches every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Match only tasks with this completion flag.
    pub completed: Option<bool>,
    /// Match only tasks with this priority.
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// Filter matching every task.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            completed: None,
            priority: None,
        }
    }

    /// Restricts the filter to the given completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Restricts the filter to the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns `true` when the task satisfies every supplied criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.completed.is_none_or(|completed| task.is_completed() == completed)
            && self.priority.is_none_or(|priority| task.priority() == priority)
    }
}

/// Task counts per priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    /// Low-priority tasks.
    pub low: u64,
    /// Medium-priority tasks.
    pub medium: u64,
    /// High-priority tasks.
    pub high: u64,
}

impl PriorityCounts {
    /// Records `count` tasks for the given priority.
    pub const fn set(&mut self, priority: Priority, count: u64) {
        match priority {
            Priority::Low => self.low = count,
            Priority::Medium => self.medium = count,
            Priority::High => self.high = count,
        }
    }
}

/// Aggregate task statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: u64,
    /// Number of completed tasks.
    pub completed: u64,
    /// Number of tasks not yet completed.
    pub pending: u64,
    /// Breakdown by priority.
    pub by_priority: PriorityCounts,
}
