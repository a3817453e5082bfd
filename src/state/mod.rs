//! Predictable-state container for the task-list front end.
//!
//! State is held in a single [`Store`] and changed exclusively by pure
//! reducers over typed [`Action`]s. Side effects live in the flow
//! controllers (see [`crate::flow`]), which observe the action stream the
//! store publishes and dispatch derived actions back into it.

mod actions;
mod auth;
mod store;
mod tasks;

pub use actions::{Action, DialogChanges};
pub use auth::{auth_reducer, AuthState, AuthToken, DialogState};
pub use store::Store;
pub use tasks::{tasks_reducer, Task, TasksState};

/// Root state: one field per slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub auth: AuthState,
    pub tasks: TasksState,
}

/// Root reducer: each slice reduces the same action independently.
pub fn reduce(state: &RootState, action: &Action) -> RootState {
    RootState {
        auth: auth_reducer(&state.auth, action),
        tasks: tasks_reducer(&state.tasks, action),
    }
}
