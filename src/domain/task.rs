use uuid::Uuid;

/// A single user-entered to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}

/// In-memory checklist, insertion order preserved. Independent of the timer.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new task. Whitespace-only text is a silent no-op.
    /// Returns the fresh id when a task was created.
    pub fn add(&mut self, text: &str) -> Option<Uuid> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let task = Task::new(trimmed.to_string());
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Flip the completed flag. Unknown ids are ignored.
    pub fn toggle(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Remove a task. Unknown ids are ignored.
    pub fn delete(&mut self, id: Uuid) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn as_slice(&self) -> &[Task] {
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

    #[test]
    fn test_add_toggle_delete_round_trip() {
        let mut list = TaskList::new();

        let id = list.add("Write report").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].text, "Write report");
        assert!(!list.as_slice()[0].completed);

        list.toggle(id);
        assert!(list.as_slice()[0].completed);

        list.delete(id);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TaskList::new();
        list.add("  review PR  ");
        assert_eq!(list.as_slice()[0].text, "review PR");
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut list = TaskList::new();
        assert!(list.add("").is_none());
        assert!(list.add("   \t ").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = TaskList::new();
        list.add("a task");
        list.toggle(Uuid::new_v4());
        assert!(!list.as_slice()[0].completed);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = TaskList::new();
        list.add("a task");
        list.delete(Uuid::new_v4());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut list = TaskList::new();
        list.add("first");
        let second = list.add("second").unwrap();
        list.add("third");

        list.toggle(second);
        list.delete(second);

        let texts: Vec<&str> = list.as_slice().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "third"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut list = TaskList::new();
        let a = list.add("one").unwrap();
        let b = list.add("one").unwrap();
        assert_ne!(a, b);
    }
}
