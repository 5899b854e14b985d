//! Per-domain slice: one result envelope per operation kind.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::store::mvi::{Action, Reducer, SliceState};
use crate::store::outcome::RemoteOutcome;

/// Operation kinds a slice understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Get,
    Post,
    Update,
    Delete,
}

/// State slice owned by one domain's reducer.
///
/// Envelopes are `Arc`-wrapped: a dispatch for one operation kind swaps
/// exactly that pointer and leaves the other three identical, which is what
/// subscribers rely on for cheap change detection.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSlice<T> {
    pub get_result: Arc<RemoteOutcome<Vec<T>>>,
    pub post_result: Arc<RemoteOutcome<T>>,
    pub update_result: Arc<RemoteOutcome<T>>,
    pub delete_result: Arc<RemoteOutcome<T>>,
}

impl<T> Default for ResourceSlice<T> {
    fn default() -> Self {
        Self {
            get_result: Arc::new(RemoteOutcome::Idle),
            post_result: Arc::new(RemoteOutcome::Idle),
            update_result: Arc::new(RemoteOutcome::Idle),
            delete_result: Arc::new(RemoteOutcome::Idle),
        }
    }
}

impl<T> SliceState for ResourceSlice<T> where T: Clone + PartialEq + Send + Sync + 'static {}

/// Action dispatched to one domain's reducer.
///
/// `Delete` is a declared capability: the reducer and gateway understand it,
/// but no creator currently drives it.
#[derive(Debug, Clone)]
pub enum ResourceAction<T> {
    Get(Arc<RemoteOutcome<Vec<T>>>),
    Post(Arc<RemoteOutcome<T>>),
    Update(Arc<RemoteOutcome<T>>),
    Delete(Arc<RemoteOutcome<T>>),
    Reset,
}

impl<T> ResourceAction<T> {
    /// Operation kind, `None` for `Reset`.
    pub fn kind(&self) -> Option<OpKind> {
        match self {
            ResourceAction::Get(_) => Some(OpKind::Get),
            ResourceAction::Post(_) => Some(OpKind::Post),
            ResourceAction::Update(_) => Some(OpKind::Update),
            ResourceAction::Delete(_) => Some(OpKind::Delete),
            ResourceAction::Reset => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceAction::Get(_) => "get",
            ResourceAction::Post(_) => "post",
            ResourceAction::Update(_) => "update",
            ResourceAction::Delete(_) => "delete",
            ResourceAction::Reset => "reset",
        }
    }
}

impl<T> Action for ResourceAction<T> where T: Send + Sync + 'static {}

/// Reducer for one domain slice.
///
/// Each non-reset arm replaces exactly the envelope named by the action and
/// nothing else; `Reset` restores the initial empty envelopes.
pub struct ResourceReducer<T>(PhantomData<T>);

impl<T> Reducer for ResourceReducer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    type State = ResourceSlice<T>;
    type Action = ResourceAction<T>;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ResourceAction::Get(result) => ResourceSlice {
                get_result: result,
                ..state
            },
            ResourceAction::Post(result) => ResourceSlice {
                post_result: result,
                ..state
            },
            ResourceAction::Update(result) => ResourceSlice {
                update_result: result,
                ..state
            },
            ResourceAction::Delete(result) => ResourceSlice {
                delete_result: result,
                ..state
            },
            ResourceAction::Reset => ResourceSlice::default(),
        }
    }
}
