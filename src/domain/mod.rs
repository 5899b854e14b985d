//! Domain record types for the three backend resources.

mod banking;
mod employee;
mod role;

pub use banking::{Activity, BankEntry};
pub use employee::{Employee, RoleSnapshot};
pub use role::{Department, Role};
