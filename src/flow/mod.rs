//! Flow controllers ("epics"): processes that observe the store's action
//! stream, perform asynchronous work, and dispatch derived actions back
//! into the same store. Reducers stay pure; all I/O lives here.

mod auth;
mod tasks;

pub use auth::AuthFlowController;
pub use tasks::TasksFlowController;
