//! Client-side search over the last fetched collection.
//!
//! Status scoping happens on the server; searching only narrows what was
//! already fetched and never touches the network.

use super::task::Task;

/// Returns the tasks whose title or priority contains `term`, ignoring case.
///
/// The result keeps the relative order of `tasks`. An empty term keeps
/// everything.
///
/// ```rust
/// use taskpro::libs::filter::search;
/// use taskpro::libs::task::{Priority, Task, TaskId};
///
/// let tasks = vec![Task {
///     id: TaskId::Number(1),
///     title: "Renew Passport".into(),
///     description: None,
///     due_date: "2024-03-01".into(),
///     priority: Priority::High,
///     status: false,
/// }];
///
/// assert_eq!(search(&tasks, "passport").len(), 1);
/// assert_eq!(search(&tasks, "high").len(), 1);
/// assert!(search(&tasks, "xyz").is_empty());
/// ```
pub fn search<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    let term = term.to_lowercase();
    tasks.iter().filter(|task| matches(task, &term)).collect()
}

/// `term` must already be lowercase.
fn matches(task: &Task, term: &str) -> bool {
    task.title.to_lowercase().contains(term) || task.priority.as_str().to_lowercase().contains(term)
}
