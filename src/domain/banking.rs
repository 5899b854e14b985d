use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of banking activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    #[default]
    Deposit,
    Withdraw,
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Activity::Deposit => write!(f, "Deposit"),
            Activity::Withdraw => write!(f, "Withdraw"),
        }
    }
}

/// One ledger entry. Withdrawals are stored with a negative `amount`; the
/// sign is applied by the banking form at submit time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BankEntry {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub activity: Activity,
    pub amount: f64,
}
