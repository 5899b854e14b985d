//! Status-tagged container for a remote operation's outcome.

/// Coarse status of an outcome, for alert derivation and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Outcome of one remote operation.
///
/// The tag makes a contradictory envelope unrepresentable: a pending
/// operation carries no payload, a failed one carries no data. Payload
/// access goes through [`RemoteOutcome::success_data`] or a match, so
/// narrowing always follows an explicit status check.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteOutcome<T> {
    /// No request issued since the slice was created or reset.
    #[default]
    Idle,
    /// Request dispatched, response not yet settled.
    Loading,
    /// The backend accepted the operation.
    Success { message: String, data: T },
    /// Transport or server failure. The payload is dropped; the message is
    /// the generic user-facing text, never the raw error detail.
    Error { message: String },
}

impl<T> RemoteOutcome<T> {
    pub fn status(&self) -> OutcomeStatus {
        match self {
            RemoteOutcome::Idle => OutcomeStatus::Idle,
            RemoteOutcome::Loading => OutcomeStatus::Loading,
            RemoteOutcome::Success { .. } => OutcomeStatus::Success,
            RemoteOutcome::Error { .. } => OutcomeStatus::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteOutcome::Loading)
    }

    /// Server message, present once the operation has settled.
    pub fn message(&self) -> Option<&str> {
        match self {
            RemoteOutcome::Success { message, .. } | RemoteOutcome::Error { message } => {
                Some(message)
            }
            _ => None,
        }
    }

    /// Payload, present only for a successful outcome.
    pub fn success_data(&self) -> Option<&T> {
        match self {
            RemoteOutcome::Success { data, .. } => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let outcome: RemoteOutcome<u32> = RemoteOutcome::default();
        assert_eq!(outcome.status(), OutcomeStatus::Idle);
        assert!(!outcome.is_loading());
    }

    #[test]
    fn loading_has_no_payload_or_message() {
        let outcome: RemoteOutcome<u32> = RemoteOutcome::Loading;
        assert!(outcome.is_loading());
        assert_eq!(outcome.message(), None);
        assert_eq!(outcome.success_data(), None);
    }

    #[test]
    fn success_exposes_data_after_status_check() {
        let outcome = RemoteOutcome::Success {
            message: "created".to_string(),
            data: 7,
        };
        assert_eq!(outcome.status(), OutcomeStatus::Success);
        assert_eq!(outcome.success_data(), Some(&7));
        assert_eq!(outcome.message(), Some("created"));
    }

    #[test]
    fn error_carries_no_data() {
        let outcome: RemoteOutcome<u32> = RemoteOutcome::Error {
            message: "oops".to_string(),
        };
        assert_eq!(outcome.status(), OutcomeStatus::Error);
        assert_eq!(outcome.success_data(), None);
    }
}
