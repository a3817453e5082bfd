use std::sync::{Mutex, MutexGuard};

use tokio::sync::broadcast;
use tracing::debug;

use crate::state::actions::Action;
use crate::state::{reduce, RootState};

/// Number of actions the publication channel buffers per subscriber before
/// a slow subscriber starts lagging.
const ACTION_CHANNEL_CAPACITY: usize = 64;

/// The state container. Owns the root state, applies the root reducer to
/// every dispatched action, and publishes the action to subscribers
/// afterwards.
///
/// `reduce + publish` runs under one lock, so reduction order and
/// publication order are both the dispatch order, and no transition ever
/// interleaves with another. Subscribers receive every action dispatched
/// after they subscribed, in order.
pub struct Store {
    inner: Mutex<RootState>,
    actions: broadcast::Sender<Action>,
}

impl Store {
    pub fn new() -> Self {
        let (actions, _) = broadcast::channel(ACTION_CHANNEL_CAPACITY);
        Self {
            inner: Mutex::new(RootState::default()),
            actions,
        }
    }

    /// Applies the root reducer synchronously, then publishes the action.
    pub fn dispatch(&self, action: Action) {
        let mut state = self.lock();
        debug!("dispatching action: {:?}", action);
        *state = reduce(&state, &action);
        // Err means nobody is listening, which is fine for a store used
        // without controllers.
        let _ = self.actions.send(action);
    }

    /// Snapshot of the current root state.
    pub fn state(&self) -> RootState {
        self.lock().clone()
    }

    // The reducer never panics while holding the guard, so a poisoned
    // lock still holds a consistent state value.
    fn lock(&self) -> MutexGuard<'_, RootState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Ordered stream of actions dispatched from this point on.
    pub fn subscribe(&self) -> broadcast::Receiver<Action> {
        self.actions.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
