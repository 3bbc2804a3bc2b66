use crate::domain::transaction::{TransactionOutcome, TransactionStatus};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the outcome report written for each replayed request.
#[derive(Debug, Serialize)]
pub struct OutcomeRow {
    pub op: String,
    pub result: String,
    pub transaction_id: String,
    pub detail: String,
}

impl OutcomeRow {
    pub fn from_outcome(op: &str, outcome: &TransactionOutcome) -> Self {
        let result = if outcome.succeeded { "OK" } else { "FAILED" };
        Self {
            op: op.to_string(),
            result: result.to_string(),
            transaction_id: outcome.transaction_id.clone(),
            detail: outcome.message.clone(),
        }
    }

    pub fn from_status(op: &str, transaction_id: &str, status: TransactionStatus) -> Self {
        Self {
            op: op.to_string(),
            result: status.to_string(),
            transaction_id: transaction_id.to_string(),
            detail: String::new(),
        }
    }
}

/// Writes outcome rows as CSV to any `Write` sink.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_row(&mut self, row: OutcomeRow) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_renders_outcomes_and_statuses() {
        let mut buffer = Vec::new();
        {
            let mut writer = OutcomeWriter::new(&mut buffer);
            writer
                .write_row(OutcomeRow::from_outcome(
                    "charge",
                    &TransactionOutcome::success("tx-1"),
                ))
                .unwrap();
            writer
                .write_row(OutcomeRow::from_outcome(
                    "refund",
                    &TransactionOutcome::failure("tx-1", "already refunded"),
                ))
                .unwrap();
            writer
                .write_row(OutcomeRow::from_status(
                    "status",
                    "tx-1",
                    TransactionStatus::Completed,
                ))
                .unwrap();
            writer.flush().unwrap();
        }

        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.starts_with("op,result,transaction_id,detail\n"));
        assert!(rendered.contains("charge,OK,tx-1,\n"));
        assert!(rendered.contains("refund,FAILED,tx-1,already refunded\n"));
        assert!(rendered.contains("status,COMPLETED,tx-1,\n"));
    }
}
