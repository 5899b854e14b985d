use serde::{Deserialize, Serialize};

/// Department a role belongs to. `dept_id` is `None` for the blank option.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Department {
    pub dept_id: Option<i64>,
    pub name: String,
}

impl Department {
    pub fn new(dept_id: i64, name: impl Into<String>) -> Self {
        Self {
            dept_id: Some(dept_id),
            name: name.into(),
        }
    }
}

/// A job role. `id` is `None` until the backend persists the record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Role {
    pub id: Option<i64>,
    pub role_name: String,
    pub role_code: String,
    pub department: Department,
}
