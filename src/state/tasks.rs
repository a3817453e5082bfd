use serde::{Deserialize, Serialize};

use crate::state::actions::Action;

/// A single task as served by the API (`isComplete` on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub is_complete: bool,
}

/// Tasks slice of the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TasksState {
    pub is_fetching: bool,
    pub tasks: Vec<Task>,
    pub error_message: String,
}

/// Pure transition function for the tasks slice. Auth actions (and any
/// other unrecognized action) return the input state unchanged.
pub fn tasks_reducer(state: &TasksState, action: &Action) -> TasksState {
    match action {
        Action::RequestTasks => TasksState {
            is_fetching: true,
            ..state.clone()
        },
        Action::ReceiveTasks(tasks) => TasksState {
            is_fetching: false,
            tasks: tasks.clone(),
            error_message: String::new(),
        },
        Action::TasksRequestFailed { error_message } => TasksState {
            is_fetching: false,
            error_message: error_message.clone(),
            ..state.clone()
        },
        _ => state.clone(),
    }
}
