//! Action creators: the only place gateway I/O meets the store.
//!
//! Each creator dispatches the pending envelope before the call and the
//! settled envelope after it, so the pending phase is observable. A newer
//! invocation of the same operation supersedes older in-flight ones; a
//! superseded invocation's settle dispatch is dropped, never overwriting
//! newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{BankEntry, Employee, Role};
use crate::gateway::{GatewayError, ResourceClient};
use crate::store::{AppAction, OpKind, RemoteOutcome, ResourceAction, Store};

/// User-facing text for any failed call. The underlying error detail goes
/// to the log, never into the store.
pub const GENERIC_ERROR_TEXT: &str = "Something went wrong, please try again.";

/// Domain types that own a slice in [`crate::store::AppState`].
pub trait Resource:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const NAME: &'static str;

    /// Wrap a slice action into the top-level action for this domain.
    fn into_app(action: ResourceAction<Self>) -> AppAction;
}

impl Resource for Role {
    const NAME: &'static str = "role";

    fn into_app(action: ResourceAction<Self>) -> AppAction {
        AppAction::Role(action)
    }
}

impl Resource for Employee {
    const NAME: &'static str = "employee";

    fn into_app(action: ResourceAction<Self>) -> AppAction {
        AppAction::Employee(action)
    }
}

impl Resource for BankEntry {
    const NAME: &'static str = "banking";

    fn into_app(action: ResourceAction<Self>) -> AppAction {
        AppAction::Banking(action)
    }
}

/// Per-operation supersession tickets.
///
/// `begin` invalidates every older invocation of the same kind; only the
/// holder of the latest ticket may dispatch its settled outcome.
#[derive(Debug, Default)]
struct OpTickets {
    get: AtomicU64,
    post: AtomicU64,
    update: AtomicU64,
    delete: AtomicU64,
}

impl OpTickets {
    fn slot(&self, kind: OpKind) -> &AtomicU64 {
        match kind {
            OpKind::Get => &self.get,
            OpKind::Post => &self.post,
            OpKind::Update => &self.update,
            OpKind::Delete => &self.delete,
        }
    }

    fn begin(&self, kind: OpKind) -> u64 {
        self.slot(kind).fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, kind: OpKind, ticket: u64) -> bool {
        self.slot(kind).load(Ordering::SeqCst) == ticket
    }
}

/// Creators for one domain slice: GET, POST, UPDATE, RESET.
///
/// DELETE stays declared in the action and gateway surface without a
/// creator here.
#[derive(Clone)]
pub struct ResourceActions<T: Resource> {
    store: Arc<Store>,
    client: ResourceClient<T>,
    tickets: Arc<OpTickets>,
}

impl<T: Resource> ResourceActions<T> {
    pub fn new(store: Arc<Store>, client: ResourceClient<T>) -> Self {
        Self {
            store,
            client,
            tickets: Arc::new(OpTickets::default()),
        }
    }

    fn dispatch(&self, action: ResourceAction<T>) {
        self.store.dispatch(T::into_app(action));
    }

    /// Fetch the collection into `get_result`.
    pub async fn get(&self) {
        let ticket = self.tickets.begin(OpKind::Get);
        self.dispatch(ResourceAction::Get(Arc::new(RemoteOutcome::Loading)));
        let outcome = match self.client.list().await {
            Ok((message, data)) => RemoteOutcome::Success { message, data },
            Err(err) => error_outcome(T::NAME, "get", &err),
        };
        if self.tickets.is_current(OpKind::Get, ticket) {
            self.dispatch(ResourceAction::Get(Arc::new(outcome)));
        } else {
            debug!(resource = T::NAME, op = "get", "dropping superseded response");
        }
    }

    /// Persist a new record into `post_result`.
    pub async fn create(&self, record: T) {
        let ticket = self.tickets.begin(OpKind::Post);
        self.dispatch(ResourceAction::Post(Arc::new(RemoteOutcome::Loading)));
        let outcome = match self.client.create(&record).await {
            Ok((message, data)) => RemoteOutcome::Success { message, data },
            Err(err) => error_outcome(T::NAME, "post", &err),
        };
        if self.tickets.is_current(OpKind::Post, ticket) {
            self.dispatch(ResourceAction::Post(Arc::new(outcome)));
        } else {
            debug!(resource = T::NAME, op = "post", "dropping superseded response");
        }
    }

    /// Update an existing record into `update_result`.
    pub async fn update(&self, record: T) {
        let ticket = self.tickets.begin(OpKind::Update);
        self.dispatch(ResourceAction::Update(Arc::new(RemoteOutcome::Loading)));
        let outcome = match self.client.update(&record).await {
            Ok((message, data)) => RemoteOutcome::Success { message, data },
            Err(err) => error_outcome(T::NAME, "update", &err),
        };
        if self.tickets.is_current(OpKind::Update, ticket) {
            self.dispatch(ResourceAction::Update(Arc::new(outcome)));
        } else {
            debug!(resource = T::NAME, op = "update", "dropping superseded response");
        }
    }

    /// Clear the slice back to its initial envelopes.
    pub fn reset(&self) {
        self.dispatch(ResourceAction::Reset);
    }
}

fn error_outcome<U>(resource: &'static str, op: &'static str, err: &GatewayError) -> RemoteOutcome<U> {
    warn!(resource, op, error = %err, "gateway call failed");
    RemoteOutcome::Error {
        message: GENERIC_ERROR_TEXT.to_string(),
    }
}
