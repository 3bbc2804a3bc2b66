use async_trait::async_trait;
use paygate::domain::ports::PaymentGateway;
use paygate::domain::transaction::{TransactionOutcome, TransactionStatus};
use paygate::error::GatewayError;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub type OutcomeResult = Result<TransactionOutcome, GatewayError>;
pub type StatusResult = Result<TransactionStatus, GatewayError>;

#[derive(Default)]
struct MockState {
    charge_response: Mutex<Option<OutcomeResult>>,
    refund_response: Mutex<Option<OutcomeResult>>,
    status_response: Mutex<Option<StatusResult>>,
    charge_calls: AtomicUsize,
    refund_calls: AtomicUsize,
    status_calls: AtomicUsize,
    last_charge: Mutex<Option<(String, Decimal)>>,
    last_refund: Mutex<Option<String>>,
}

/// A scripted gateway double: returns canned responses and counts calls.
///
/// Clones share state, so a handle kept outside the processor can assert on
/// call counts and captured arguments after the boxed clone was consumed.
#[derive(Default, Clone)]
pub struct MockGateway {
    inner: Arc<MockState>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charge_returns(self, response: OutcomeResult) -> Self {
        *self.inner.charge_response.lock().unwrap() = Some(response);
        self
    }

    pub fn refund_returns(self, response: OutcomeResult) -> Self {
        *self.inner.refund_response.lock().unwrap() = Some(response);
        self
    }

    pub fn status_returns(self, response: StatusResult) -> Self {
        *self.inner.status_response.lock().unwrap() = Some(response);
        self
    }

    pub fn charge_calls(&self) -> usize {
        self.inner.charge_calls.load(Ordering::SeqCst)
    }

    pub fn refund_calls(&self) -> usize {
        self.inner.refund_calls.load(Ordering::SeqCst)
    }

    pub fn status_calls(&self) -> usize {
        self.inner.status_calls.load(Ordering::SeqCst)
    }

    pub fn last_charge(&self) -> Option<(String, Decimal)> {
        self.inner.last_charge.lock().unwrap().clone()
    }

    pub fn last_refund(&self) -> Option<String> {
        self.inner.last_refund.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn charge(
        &self,
        user_id: &str,
        amount: Decimal,
    ) -> Result<TransactionOutcome, GatewayError> {
        self.inner.charge_calls.fetch_add(1, Ordering::SeqCst);
        *self.inner.last_charge.lock().unwrap() = Some((user_id.to_string(), amount));
        self.inner
            .charge_response
            .lock()
            .unwrap()
            .clone()
            .expect("charge response not scripted")
    }

    async fn refund(&self, transaction_id: &str) -> Result<TransactionOutcome, GatewayError> {
        self.inner.refund_calls.fetch_add(1, Ordering::SeqCst);
        *self.inner.last_refund.lock().unwrap() = Some(transaction_id.to_string());
        self.inner
            .refund_response
            .lock()
            .unwrap()
            .clone()
            .expect("refund response not scripted")
    }

    async fn get_status(&self, _transaction_id: &str) -> Result<TransactionStatus, GatewayError> {
        self.inner.status_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .status_response
            .lock()
            .unwrap()
            .clone()
            .expect("status response not scripted")
    }
}
