//! Banking form controller: deposit/withdraw entry over the ledger.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::task::JoinHandle;

use crate::actions::{ResourceActions, GENERIC_ERROR_TEXT};
use crate::domain::{Activity, BankEntry};
use crate::forms::alert::{Alert, AlertBanner, AlertColor};
use crate::store::{AppState, RemoteOutcome};

/// No edit mode and no tab host here: the banking form only creates
/// entries. The amount is kept as the raw input string until submit.
pub struct BankingForm {
    actions: ResourceActions<BankEntry>,
    activity: Activity,
    amount: String,
    alert: AlertBanner,
    seen_post: Arc<RemoteOutcome<BankEntry>>,
}

impl BankingForm {
    pub fn new(actions: ResourceActions<BankEntry>) -> Self {
        Self {
            actions,
            activity: Activity::Deposit,
            amount: "0".to_string(),
            alert: AlertBanner::new(),
            seen_post: Arc::new(RemoteOutcome::Idle),
        }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn alert(&self) -> Alert {
        self.alert.snapshot()
    }

    pub fn set_activity(&mut self, activity: Activity) {
        self.activity = activity;
    }

    pub fn set_amount(&mut self, raw: impl Into<String>) {
        self.amount = raw.into();
    }

    /// Restore the default activity and amount.
    pub fn reset_fields(&mut self) {
        self.activity = Activity::Deposit;
        self.amount = "0".to_string();
    }

    /// Re-fetch the ledger into `get_result`.
    pub fn refresh(&self) -> JoinHandle<()> {
        let actions = self.actions.clone();
        tokio::spawn(async move { actions.get().await })
    }

    /// Submit the entry dated today.
    pub fn submit(&mut self) -> Option<JoinHandle<()>> {
        self.submit_on(Local::now().date_naive())
    }

    /// Build and post the entry for `date`. Withdrawals are negated before
    /// dispatch. A non-numeric amount shows the danger banner and
    /// dispatches nothing.
    pub fn submit_on(&mut self, date: NaiveDate) -> Option<JoinHandle<()>> {
        let Ok(parsed) = self.amount.trim().parse::<f64>() else {
            self.alert.show(AlertColor::Danger, GENERIC_ERROR_TEXT);
            return None;
        };
        let amount = match self.activity {
            Activity::Withdraw => -parsed,
            Activity::Deposit => parsed,
        };
        let entry = BankEntry {
            id: None,
            date,
            activity: self.activity,
            amount,
        };
        let actions = self.actions.clone();
        Some(tokio::spawn(async move { actions.create(entry).await }))
    }

    /// React to the latest post result.
    pub fn observe(&mut self, state: &AppState) {
        let slice = &state.banking;
        if !Arc::ptr_eq(&slice.post_result, &self.seen_post) {
            self.seen_post = slice.post_result.clone();
            match self.seen_post.as_ref() {
                RemoteOutcome::Success { message, .. } => {
                    let message = message.clone();
                    self.alert.show(AlertColor::Success, message);
                }
                RemoteOutcome::Error { .. } => {
                    self.alert.show(AlertColor::Danger, GENERIC_ERROR_TEXT);
                }
                RemoteOutcome::Idle | RemoteOutcome::Loading => {}
            }
        }
    }
}
