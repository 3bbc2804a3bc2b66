use crate::domain::audit::AuditRecord;
use crate::domain::ports::{AuditSinkBox, PaymentGatewayBox};
use crate::domain::transaction::{TransactionOutcome, TransactionStatus};
use crate::error::{GatewayError, PaymentError, Result};
use rust_decimal::Decimal;

/// The single entry point for payment orchestration.
///
/// `PaymentProcessor` validates caller input before touching the gateway,
/// delegates each operation to the injected [`PaymentGateway`] implementation,
/// absorbs the fault kinds that operation declares into a failure-shaped
/// outcome, and emits one audit record per terminal outcome. Fault kinds an
/// operation does not declare are returned to the caller unchanged, as are
/// validation errors: those signal a caller bug, not a business failure.
///
/// The processor holds no mutable state; all methods take `&self` and it is
/// safe to share across tasks as long as the gateway itself is.
///
/// [`PaymentGateway`]: crate::domain::ports::PaymentGateway
pub struct PaymentProcessor {
    gateway: PaymentGatewayBox,
    audit: AuditSinkBox,
}

impl PaymentProcessor {
    /// Creates a processor around a gateway and an audit sink.
    ///
    /// Both collaborators are fixed for the processor's lifetime.
    pub fn new(gateway: PaymentGatewayBox, audit: AuditSinkBox) -> Self {
        Self { gateway, audit }
    }

    /// Charges `amount` against `user_id`.
    ///
    /// Declared `Network` and `Payment` faults become a failed outcome whose
    /// transaction id is empty; the backend-assigned id does not survive this
    /// path.
    pub async fn process_payment(
        &self,
        user_id: &str,
        amount: Decimal,
    ) -> Result<TransactionOutcome> {
        if user_id.is_empty() {
            return Err(PaymentError::EmptyUserId);
        }
        if amount <= Decimal::ZERO {
            return Err(PaymentError::NonPositiveAmount(amount));
        }

        match self.gateway.charge(user_id, amount).await {
            Ok(outcome) => {
                if outcome.succeeded {
                    self.audit.emit(
                        AuditRecord::info(format!(
                            "payment processed for user {user_id}, transaction {}",
                            outcome.transaction_id
                        ))
                        .with_user(user_id)
                        .with_transaction(outcome.transaction_id.as_str()),
                    );
                } else {
                    self.audit.emit(
                        AuditRecord::warning(format!(
                            "payment failed for user {user_id}: {}",
                            outcome.message
                        ))
                        .with_user(user_id),
                    );
                }
                Ok(outcome)
            }
            Err(GatewayError::Network(reason)) | Err(GatewayError::Payment(reason)) => {
                self.audit.emit(
                    AuditRecord::error(format!(
                        "error processing payment for user {user_id}: {reason}"
                    ))
                    .with_user(user_id),
                );
                Ok(TransactionOutcome::failure("", reason))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Refunds the transaction identified by `transaction_id`.
    ///
    /// Declared `Refund` and `Network` faults become a failed outcome carrying
    /// the caller-supplied id; unlike the charge path, the id is known-valid
    /// even when the backend fails.
    pub async fn refund_payment(&self, transaction_id: &str) -> Result<TransactionOutcome> {
        if transaction_id.is_empty() {
            return Err(PaymentError::EmptyTransactionId);
        }

        match self.gateway.refund(transaction_id).await {
            Ok(outcome) => {
                if outcome.succeeded {
                    self.audit.emit(
                        AuditRecord::info(format!(
                            "refund processed for transaction {transaction_id}"
                        ))
                        .with_transaction(transaction_id),
                    );
                } else {
                    self.audit.emit(
                        AuditRecord::warning(format!(
                            "refund failed for transaction {transaction_id}: {}",
                            outcome.message
                        ))
                        .with_transaction(transaction_id),
                    );
                }
                Ok(outcome)
            }
            Err(GatewayError::Refund(reason)) | Err(GatewayError::Network(reason)) => {
                self.audit.emit(
                    AuditRecord::error(format!(
                        "error processing refund for transaction {transaction_id}: {reason}"
                    ))
                    .with_transaction(transaction_id),
                );
                Ok(TransactionOutcome::failure(transaction_id, reason))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Looks up the status of the transaction identified by `transaction_id`.
    ///
    /// An unreachable gateway reads as [`TransactionStatus::Failed`] rather
    /// than an error, and that path emits no audit record.
    pub async fn get_payment_status(&self, transaction_id: &str) -> Result<TransactionStatus> {
        if transaction_id.is_empty() {
            return Err(PaymentError::EmptyTransactionId);
        }

        match self.gateway.get_status(transaction_id).await {
            Ok(status) => {
                self.audit.emit(
                    AuditRecord::info(format!(
                        "status for transaction {transaction_id}: {status}"
                    ))
                    .with_transaction(transaction_id),
                );
                Ok(status)
            }
            Err(GatewayError::Network(_)) => Ok(TransactionStatus::Failed),
            Err(other) => Err(other.into()),
        }
    }
}
