//! Client-side core for a small HR and banking administration tool.
//!
//! Data flows one way: a form controller dispatches an action creator, the
//! creator performs gateway I/O and dispatches result actions, reducers fold
//! those into the store's state tree, and subscribers re-read the slices
//! they care about.

pub mod actions;
pub mod config;
pub mod domain;
pub mod forms;
pub mod gateway;
pub mod store;
