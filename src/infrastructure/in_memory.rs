use crate::domain::audit::AuditRecord;
use crate::domain::ports::{AuditSink, PaymentGateway};
use crate::domain::transaction::{TransactionOutcome, TransactionStatus};
use crate::error::GatewayError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

struct ChargeRecord {
    user_id: String,
    amount: Decimal,
    status: TransactionStatus,
    refunded: bool,
}

#[derive(Default)]
struct GatewayState {
    balances: HashMap<String, Decimal>,
    charges: HashMap<String, ChargeRecord>,
    next_id: u64,
}

/// A simulated payment backend for demos and tests.
///
/// Accounts are seeded lazily with a fixed starting balance. Charges debit the
/// balance and receive sequential transaction ids; a charge that exceeds the
/// balance is declined with a failed outcome, not a fault. Raises only the
/// fault kinds the gateway contract declares for each operation.
#[derive(Clone)]
pub struct InMemoryGateway {
    starting_balance: Decimal,
    state: Arc<RwLock<GatewayState>>,
}

impl InMemoryGateway {
    pub fn with_starting_balance(starting_balance: Decimal) -> Self {
        Self {
            starting_balance,
            state: Arc::default(),
        }
    }
}

#[async_trait]
impl PaymentGateway for InMemoryGateway {
    async fn charge(
        &self,
        user_id: &str,
        amount: Decimal,
    ) -> Result<TransactionOutcome, GatewayError> {
        let mut state = self.state.write().await;
        let state = &mut *state;

        state.next_id += 1;
        let transaction_id = format!("tx-{}", state.next_id);

        let balance = state
            .balances
            .entry(user_id.to_string())
            .or_insert(self.starting_balance);

        if *balance < amount {
            state.charges.insert(
                transaction_id.clone(),
                ChargeRecord {
                    user_id: user_id.to_string(),
                    amount,
                    status: TransactionStatus::Failed,
                    refunded: false,
                },
            );
            return Ok(TransactionOutcome::failure(
                transaction_id,
                "insufficient funds",
            ));
        }

        *balance -= amount;
        state.charges.insert(
            transaction_id.clone(),
            ChargeRecord {
                user_id: user_id.to_string(),
                amount,
                status: TransactionStatus::Completed,
                refunded: false,
            },
        );
        Ok(TransactionOutcome::success(transaction_id))
    }

    async fn refund(&self, transaction_id: &str) -> Result<TransactionOutcome, GatewayError> {
        let mut state = self.state.write().await;
        let state = &mut *state;

        let Some(record) = state.charges.get_mut(transaction_id) else {
            return Err(GatewayError::Refund(format!(
                "unknown transaction {transaction_id}"
            )));
        };

        if record.status != TransactionStatus::Completed {
            return Ok(TransactionOutcome::failure(
                transaction_id,
                "transaction was not settled",
            ));
        }
        if record.refunded {
            return Ok(TransactionOutcome::failure(
                transaction_id,
                "transaction already refunded",
            ));
        }

        record.refunded = true;
        let user_id = record.user_id.clone();
        let amount = record.amount;
        *state
            .balances
            .entry(user_id)
            .or_insert(self.starting_balance) += amount;

        Ok(TransactionOutcome::success(transaction_id))
    }

    async fn get_status(&self, transaction_id: &str) -> Result<TransactionStatus, GatewayError> {
        let state = self.state.read().await;
        Ok(state
            .charges
            .get(transaction_id)
            .map(|record| record.status)
            .unwrap_or(TransactionStatus::Failed))
    }
}

/// Captures audit records in memory so tests can assert on the trail.
///
/// Clones share the same buffer, so a handle kept outside the processor sees
/// everything the processor emits.
#[derive(Default, Clone)]
pub struct MemoryAuditSink {
    records: Arc<Mutex<Vec<AuditRecord>>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl AuditSink for MemoryAuditSink {
    fn emit(&self, record: AuditRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}
