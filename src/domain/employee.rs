use serde::{Deserialize, Serialize};

use crate::domain::role::{Department, Role};

/// Denormalized copy of a role embedded in an employee record.
///
/// The snapshot is captured when a role is picked in the form and is not
/// kept in sync with later edits to the role itself. Treat it as data as of
/// submit time, not a live reference; refreshing it is the editor's job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleSnapshot {
    pub id: Option<i64>,
    pub role_name: String,
    pub role_code: String,
    pub department: Department,
}

impl From<&Role> for RoleSnapshot {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            role_name: role.role_name.clone(),
            role_code: role.role_code.clone(),
            department: role.department.clone(),
        }
    }
}

/// An employee record. `employee_code` is stored with the role-code prefix
/// already applied (see the employee form controller).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<i64>,
    pub full_name: String,
    pub employee_code: String,
    pub address: String,
    pub mobile_no: String,
    pub age: Option<u32>,
    pub npwp: String,
    pub role: RoleSnapshot,
}
