//! Employee form controller.
//!
//! Picks a role from the role slice and embeds it as a snapshot; the
//! employee code is synthesized as `<role_code>-<input>` at submit time.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::actions::{ResourceActions, GENERIC_ERROR_TEXT};
use crate::domain::{Employee, Role, RoleSnapshot};
use crate::forms::alert::{Alert, AlertBanner, AlertColor};
use crate::forms::status::{FormStatus, FormStatusSender};
use crate::store::{AppState, RemoteOutcome};

pub struct EmployeeForm {
    actions: ResourceActions<Employee>,
    status_tx: FormStatusSender<Employee>,
    form: FormStatus<Employee>,
    draft: Employee,
    alert: AlertBanner,
    seen_post: Arc<RemoteOutcome<Employee>>,
    seen_update: Arc<RemoteOutcome<Employee>>,
}

impl EmployeeForm {
    /// Construction kicks off a role fetch so the role picker has options.
    pub fn new(
        actions: ResourceActions<Employee>,
        role_actions: ResourceActions<Role>,
        status_tx: FormStatusSender<Employee>,
    ) -> Self {
        tokio::spawn(async move { role_actions.get().await });
        Self {
            actions,
            status_tx,
            form: FormStatus::default(),
            draft: Employee::default(),
            alert: AlertBanner::new(),
            seen_post: Arc::new(RemoteOutcome::Idle),
            seen_update: Arc::new(RemoteOutcome::Idle),
        }
    }

    /// Role options for the picker, empty until the fetch succeeds.
    pub fn role_options(state: &AppState) -> Vec<Role> {
        state
            .role
            .get_result
            .success_data()
            .cloned()
            .unwrap_or_default()
    }

    pub fn draft(&self) -> &Employee {
        &self.draft
    }

    pub fn is_edit(&self) -> bool {
        self.form.edit
    }

    pub fn alert(&self) -> Alert {
        self.alert.snapshot()
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.draft.full_name = value.into();
    }

    pub fn set_employee_code(&mut self, value: impl Into<String>) {
        self.draft.employee_code = value.into();
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.draft.address = value.into();
    }

    pub fn set_mobile_no(&mut self, value: impl Into<String>) {
        self.draft.mobile_no = value.into();
    }

    pub fn set_age(&mut self, value: Option<u32>) {
        self.draft.age = value;
    }

    pub fn set_npwp(&mut self, value: impl Into<String>) {
        self.draft.npwp = value.into();
    }

    /// Embed a snapshot of the picked role in the draft.
    pub fn select_role(&mut self, role: &Role) {
        self.draft.role = RoleSnapshot::from(role);
    }

    pub fn clear_role(&mut self) {
        self.draft.role = RoleSnapshot::default();
    }

    /// Seed the draft from the host's descriptor.
    pub fn set_form(&mut self, form: FormStatus<Employee>) {
        self.draft = if form.edit {
            form.data.clone()
        } else {
            Employee::default()
        };
        self.form = form;
    }

    /// React to the latest employee slice envelopes.
    pub fn observe(&mut self, state: &AppState) {
        let slice = &state.employee;
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

    fn apply_outcome(&mut self, outcome: &RemoteOutcome<Employee>) {
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

    /// Submit the draft.
    ///
    /// The employee code is prefixed with the embedded role's code by
    /// mutating the draft first, so the caller sees the prefixed value
    /// afterwards — even when the raw input was empty. Create mode reports
    /// the submitted draft to the host with edit mode engaged; edit mode
    /// submits the update without reporting.
    pub fn submit(&mut self) -> JoinHandle<()> {
        self.draft.employee_code = format!(
            "{}-{}",
            self.draft.role.role_code, self.draft.employee_code
        );
        let actions = self.actions.clone();
        let record = self.draft.clone();
        if self.form.edit {
            tokio::spawn(async move { actions.update(record).await })
        } else {
            let report = FormStatus {
                tab_index: 0,
                edit: true,
                data: self.draft.clone(),
            };
            self.form = report.clone();
            let _ = self.status_tx.send(report);
            tokio::spawn(async move { actions.create(record).await })
        }
    }

    /// Reset to create mode with an empty draft; honored only while editing.
    pub fn new_entry(&mut self) -> bool {
        if !self.form.edit {
            return false;
        }
        let clear = FormStatus {
            tab_index: 0,
            edit: false,
            data: Employee::default(),
        };
        self.set_form(clear.clone());
        let _ = self.status_tx.send(clear);
        true
    }
}

impl Drop for EmployeeForm {
    /// Mirror of the on-unmount cleanup: clear the employee slice so a
    /// stale result cannot seed the next form instance.
    fn drop(&mut self) {
        self.actions.reset();
    }
}
