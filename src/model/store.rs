use crate::model::task::{Task, TaskId};

/// In-memory ordered task collection. Insertion order is preserved; new
/// tasks are appended at the end. Owns every `Task` for the session.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// An empty store.
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// The three sample tasks the app starts with.
    pub fn seeded() -> Self {
        let mut store = TaskStore::new();
        for n in 1..=3 {
            store.add(format!("Tarefa {}", n), format!("Descrição da Tarefa {}", n));
        }
        store
    }

    /// Append a new task. A title that is empty after trimming is silently
    /// rejected and the store is left untouched — no error is surfaced.
    /// The title is stored as given; only the emptiness check trims.
    pub fn add(&mut self, title: impl Into<String>, description: impl Into<String>) -> Option<TaskId> {
        let title = title.into();
        if title.trim().is_empty() {
            return None;
        }
        let task = Task::new(title, description.into());
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Remove the task with this id. No-op if absent.
    pub fn remove(&mut self, id: TaskId) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Look up a task by id.
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_appends_in_order_with_unique_ids() {
        let mut store = TaskStore::new();
        let a = store.add("A", "da").unwrap();
        let b = store.add("B", "db").unwrap();
        let c = store.add("C", "dc").unwrap();

        assert_eq!(store.len(), 3);
        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn empty_title_is_silently_rejected() {
        let mut store = TaskStore::new();
        assert_eq!(store.add("", "desc"), None);
        assert_eq!(store.add("   ", "desc"), None);
        assert_eq!(store.add("\t\n", "desc"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn title_with_surrounding_whitespace_is_kept_verbatim() {
        let mut store = TaskStore::new();
        let id = store.add("  padded  ", "").unwrap();
        assert_eq!(store.find(id).unwrap().title, "  padded  ");
    }

    #[test]
    fn remove_then_find_returns_none() {
        let mut store = TaskStore::new();
        let id = store.add("A", "").unwrap();
        store.remove(id);
        assert_eq!(store.find(id), None);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_unknown_id_preserves_size_and_order() {
        let mut store = TaskStore::new();
        store.add("A", "");
        store.add("B", "");
        let mut other = TaskStore::new();
        let stranger = other.add("X", "").unwrap();

        store.remove(stranger);

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn remove_first_of_two_leaves_second() {
        let mut store = TaskStore::new();
        let t1 = store.add("Tarefa 1", "D1").unwrap();
        store.add("Tarefa 2", "D2");

        store.remove(t1);

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Tarefa 2"]);
    }

    #[test]
    fn seeded_store_has_three_sample_tasks() {
        let store = TaskStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.tasks()[0].title, "Tarefa 1");
        assert_eq!(store.tasks()[0].description, "Descrição da Tarefa 1");
        assert_eq!(store.tasks()[2].title, "Tarefa 3");
    }
}
