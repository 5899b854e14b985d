//! Role form controller: draft editing, create/edit submit, alert derivation.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::actions::{ResourceActions, GENERIC_ERROR_TEXT};
use crate::domain::{Department, Role};
use crate::forms::alert::{Alert, AlertBanner, AlertColor};
use crate::forms::status::{FormStatus, FormStatusSender};
use crate::store::{AppState, RemoteOutcome};

pub struct RoleForm {
    actions: ResourceActions<Role>,
    status_tx: FormStatusSender<Role>,
    form: FormStatus<Role>,
    draft: Role,
    alert: AlertBanner,
    seen_post: Arc<RemoteOutcome<Role>>,
    seen_update: Arc<RemoteOutcome<Role>>,
}

impl RoleForm {
    pub fn new(actions: ResourceActions<Role>, status_tx: FormStatusSender<Role>) -> Self {
        Self {
            actions,
            status_tx,
            form: FormStatus::default(),
            draft: Role::default(),
            alert: AlertBanner::new(),
            seen_post: Arc::new(RemoteOutcome::Idle),
            seen_update: Arc::new(RemoteOutcome::Idle),
        }
    }

    /// Fixed department options offered by the picker.
    pub fn department_options() -> Vec<Department> {
        vec![
            Department::default(),
            Department::new(0, "HR"),
            Department::new(1, "Engineer"),
            Department::new(2, "Marketing"),
            Department::new(3, "Finance"),
            Department::new(4, "Operational"),
        ]
    }

    pub fn draft(&self) -> &Role {
        &self.draft
    }

    pub fn is_edit(&self) -> bool {
        self.form.edit
    }

    pub fn alert(&self) -> Alert {
        self.alert.snapshot()
    }

    pub fn set_role_code(&mut self, value: impl Into<String>) {
        self.draft.role_code = value.into();
    }

    pub fn set_role_name(&mut self, value: impl Into<String>) {
        self.draft.role_name = value.into();
    }

    pub fn set_department(&mut self, department: Department) {
        self.draft.department = department;
    }

    /// Seed the draft from the host's descriptor: the edit payload in edit
    /// mode, the empty record otherwise.
    pub fn set_form(&mut self, form: FormStatus<Role>) {
        self.draft = if form.edit {
            form.data.clone()
        } else {
            Role::default()
        };
        self.form = form;
    }

    /// React to the latest role slice envelopes. Success re-seeds the draft
    /// from the returned record; error shows the generic danger banner.
    pub fn observe(&mut self, state: &AppState) {
        let slice = &state.role;
        if !Arc::ptr_eq(&slice.post_result, &self.seen_post) {
            self.seen_post = slice.post_result.clone();
            let outcome = self.seen_post.clone();
            self.apply_outcome(&outcome);
        }
        if !Arc::ptr_eq(&slice.update_result, &self.seen_update) {
            self.seen_update = slice.update_result.clone();
            let outcome = self.seen_update.clone();
            self.apply_outcome(&outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: &RemoteOutcome<Role>) {
        match outcome {
            RemoteOutcome::Success { message, data } => {
                self.draft = data.clone();
                self.alert.show(AlertColor::Success, message.clone());
            }
            RemoteOutcome::Error { .. } => {
                self.alert.show(AlertColor::Danger, GENERIC_ERROR_TEXT);
            }
            RemoteOutcome::Idle | RemoteOutcome::Loading => {}
        }
    }

    /// Submit the draft: POST in create mode, PUT in edit mode. Both report
    /// the submitted draft back to the host with edit mode engaged.
    pub fn submit(&mut self) -> JoinHandle<()> {
        let actions = self.actions.clone();
        let record = self.draft.clone();
        let handle = if self.form.edit {
            tokio::spawn(async move { actions.update(record).await })
        } else {
            tokio::spawn(async move { actions.create(record).await })
        };
        let report = FormStatus {
            tab_index: 0,
            edit: true,
            data: self.draft.clone(),
        };
        self.form = report.clone();
        let _ = self.status_tx.send(report);
        handle
    }

    /// Reset to create mode with an empty draft. Honored only while
    /// editing; returns whether the reset happened.
    pub fn new_entry(&mut self) -> bool {
        if !self.form.edit {
            return false;
        }
        let clear = FormStatus {
            tab_index: 0,
            edit: false,
            data: Role::default(),
        };
        self.set_form(clear.clone());
        let _ = self.status_tx.send(clear);
        true
    }
}
