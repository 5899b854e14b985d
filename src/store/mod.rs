//! Composed state tree and the store that owns it.
//!
//! The store is the sole shared mutable resource. All mutation goes through
//! [`Store::dispatch`], which reduces under a lock: transitions are totally
//! ordered, one at a time. Subscribers receive every published tree through
//! a watch channel and re-read the slices they care about.

pub mod mvi;
mod outcome;
mod slice;

pub use outcome::{OutcomeStatus, RemoteOutcome};
pub use slice::{OpKind, ResourceAction, ResourceReducer, ResourceSlice};

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::trace;

use crate::domain::{BankEntry, Employee, Role};
use crate::store::mvi::{Action, Reducer, SliceState};

/// Process-wide state tree: one slice per domain.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub role: ResourceSlice<Role>,
    pub employee: ResourceSlice<Employee>,
    pub banking: ResourceSlice<BankEntry>,
}

impl SliceState for AppState {}

/// Top-level action: routes a domain action to its owning slice.
#[derive(Debug, Clone)]
pub enum AppAction {
    Role(ResourceAction<Role>),
    Employee(ResourceAction<Employee>),
    Banking(ResourceAction<BankEntry>),
}

impl AppAction {
    pub fn label(&self) -> (&'static str, &'static str) {
        match self {
            AppAction::Role(action) => ("role", action.label()),
            AppAction::Employee(action) => ("employee", action.label()),
            AppAction::Banking(action) => ("banking", action.label()),
        }
    }
}

impl Action for AppAction {}

/// Reduces the composed tree by delegating to the owning slice's reducer.
///
/// Slices not named by the action are carried over untouched, so their
/// envelopes stay pointer-identical across the dispatch. There is no
/// cross-slice coordination.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AppAction::Role(action) => AppState {
                role: ResourceReducer::reduce(state.role, action),
                ..state
            },
            AppAction::Employee(action) => AppState {
                employee: ResourceReducer::reduce(state.employee, action),
                ..state
            },
            AppAction::Banking(action) => AppState {
                banking: ResourceReducer::reduce(state.banking, action),
                ..state
            },
        }
    }
}

/// Owns the state tree and notifies subscribers on change.
pub struct Store {
    current: Mutex<Arc<AppState>>,
    publisher: watch::Sender<Arc<AppState>>,
}

impl Store {
    pub fn new() -> Self {
        let initial = Arc::new(AppState::default());
        let (publisher, _receiver) = watch::channel(initial.clone());
        Self {
            current: Mutex::new(initial),
            publisher,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<AppState> {
        self.current.lock().clone()
    }

    /// Subscribe to state changes. The receiver observes every tree
    /// published after subscription (plus the one current at call time).
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.publisher.subscribe()
    }

    /// Apply an action. Reduction happens under the lock, so dispatches are
    /// processed strictly one at a time in arrival order.
    pub fn dispatch(&self, action: AppAction) {
        let (slice, op) = action.label();
        trace!(slice, op, "dispatch");
        let mut current = self.current.lock();
        let next = Arc::new(AppReducer::reduce((**current).clone(), action));
        *current = next.clone();
        self.publisher.send_replace(next);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
