//! Unidirectional data-flow primitives for the store.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscriber
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a slice (or the whole tree)
//! - **Action**: result of a gateway call, or a reset instruction
//! - **Reducer**: pure function that folds an action into new state

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::SliceState;
