use super::audit::AuditRecord;
use super::transaction::{TransactionOutcome, TransactionStatus};
use crate::error::GatewayError;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// The payment backend the facade delegates to.
///
/// Implementations must raise only the fault kinds declared per operation:
/// `Network` or `Payment` from `charge`, `Refund` or `Network` from `refund`,
/// and `Network` from `get_status`.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(
        &self,
        user_id: &str,
        amount: Decimal,
    ) -> Result<TransactionOutcome, GatewayError>;

    async fn refund(&self, transaction_id: &str) -> Result<TransactionOutcome, GatewayError>;

    async fn get_status(&self, transaction_id: &str) -> Result<TransactionStatus, GatewayError>;
}

/// Write-only destination for audit records.
pub trait AuditSink: Send + Sync {
    fn emit(&self, record: AuditRecord);
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type AuditSinkBox = Box<dyn AuditSink>;
pub type PaymentGatewayFactory = Box<dyn Fn() -> PaymentGatewayBox + Send + Sync>;
