use std::fmt;

use uuid::Uuid;

/// Opaque task identifier. Minted by the store at creation time and never
/// accepted from outside; the sole equality/lookup key for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub(crate) fn generate() -> Self {
        TaskId(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A task. Immutable after creation — there is no edit operation; "add"
/// only ever creates new tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
}

impl Task {
    pub(crate) fn new(title: String, description: String) -> Self {
        Task {
            id: TaskId::generate(),
            title,
            description,
        }
    }
}
