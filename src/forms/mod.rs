//! Headless form controllers.
//!
//! Each controller owns a draft record and a transient alert banner,
//! observes its slice through state snapshots, and dispatches creators on
//! submit. Rendering is the embedder's concern.

mod alert;
mod banking;
mod employee;
mod role;
mod status;

pub use alert::{Alert, AlertBanner, AlertColor, HIDE_DELAY};
pub use banking::BankingForm;
pub use employee::EmployeeForm;
pub use role::RoleForm;
pub use status::{status_channel, FormStatus, FormStatusSender};
