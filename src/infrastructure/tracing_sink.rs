use crate::domain::audit::{AuditLevel, AuditRecord};
use crate::domain::ports::AuditSink;

/// Forwards audit records to the `tracing` subscriber installed by the host
/// application. The library itself never installs one.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingAuditSink {
    fn emit(&self, record: AuditRecord) {
        let user_id = record.user_id.as_deref().unwrap_or("-");
        let transaction_id = record.transaction_id.as_deref().unwrap_or("-");
        match record.level {
            AuditLevel::Info => {
                tracing::info!(user_id, transaction_id, "{}", record.message);
            }
            AuditLevel::Warning => {
                tracing::warn!(user_id, transaction_id, "{}", record.message);
            }
            AuditLevel::Error => {
                tracing::error!(user_id, transaction_id, "{}", record.message);
            }
        }
    }
}
