//! Domain model for task tracking.
//!
//! The domain covers the task record itself, its validated creation payload,
//! partial updates, and the filter and statistics value types used by
//! queries. Infrastructure concerns stay outside this boundary.

mod error;
mod ids;
mod priority;
mod query;
mod task;

pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use query::{PriorityCounts, TaskFilter, TaskStats};
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};
