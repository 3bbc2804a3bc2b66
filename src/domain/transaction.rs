use serde::{Deserialize, Serialize};
use std::fmt;

/// Uniform result of a charge or refund.
///
/// `transaction_id` and `message` default to empty strings rather than being
/// absent, so callers can always inspect `succeeded` and format the rest
/// without unwrapping. An empty `transaction_id` is only produced on failed
/// outcomes with no backend-assigned id. Values are never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutcome {
    pub succeeded: bool,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub message: String,
}

impl TransactionOutcome {
    pub fn success(transaction_id: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            transaction_id: transaction_id.into(),
            message: String::new(),
        }
    }

    pub fn failure(transaction_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            transaction_id: transaction_id.into(),
            message: message.into(),
        }
    }
}

/// Lifecycle state of a transaction as reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        };
        f.write_str(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome_has_empty_message() {
        let outcome = TransactionOutcome::success("tx-1");
        assert!(outcome.succeeded);
        assert_eq!(outcome.transaction_id, "tx-1");
        assert_eq!(outcome.message, "");
    }

    #[test]
    fn test_failure_outcome_keeps_id_and_message() {
        let outcome = TransactionOutcome::failure("tx-2", "declined");
        assert!(!outcome.succeeded);
        assert_eq!(outcome.transaction_id, "tx-2");
        assert_eq!(outcome.message, "declined");
    }

    #[test]
    fn test_status_display_matches_wire_values() {
        assert_eq!(TransactionStatus::Pending.to_string(), "PENDING");
        assert_eq!(TransactionStatus::Completed.to_string(), "COMPLETED");
        assert_eq!(TransactionStatus::Failed.to_string(), "FAILED");
    }
}
