use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Fault kinds a payment gateway may raise.
///
/// The taxonomy is closed per operation: `charge` may raise `Network` or
/// `Payment`, `refund` may raise `Refund` or `Network`, and `get_status` may
/// raise `Network`. The processor absorbs exactly those subsets; any other
/// kind surfaces to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("payment processing error: {0}")]
    Payment(String),
    #[error("refund error: {0}")]
    Refund(String),
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("user id must not be empty")]
    EmptyUserId,
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("transaction id must not be empty")]
    EmptyTransactionId,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
