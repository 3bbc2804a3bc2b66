use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paygate::application::processor::PaymentProcessor;
use paygate::domain::ports::{AuditSinkBox, PaymentGatewayBox};
use paygate::infrastructure::in_memory::InMemoryGateway;
use paygate::infrastructure::tracing_sink::TracingAuditSink;
use paygate::interfaces::csv::outcome_writer::{OutcomeRow, OutcomeWriter};
use paygate::interfaces::csv::request_reader::{PaymentRequest, RequestKind, RequestReader};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input requests CSV file
    input: PathBuf,

    /// Balance granted to each account on first use
    #[arg(long, default_value_t = dec!(100))]
    starting_balance: Decimal,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let gateway: PaymentGatewayBox =
        Box::new(InMemoryGateway::with_starting_balance(cli.starting_balance));
    let audit: AuditSinkBox = Box::new(TracingAuditSink::new());
    let processor = PaymentProcessor::new(gateway, audit);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());

    for request in reader.requests() {
        match request {
            Ok(request) => {
                if let Err(e) = replay_request(&processor, &mut writer, request).await {
                    eprintln!("Error processing request: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;

    Ok(())
}

async fn replay_request<W: Write>(
    processor: &PaymentProcessor,
    writer: &mut OutcomeWriter<W>,
    request: PaymentRequest,
) -> paygate::error::Result<()> {
    let row = match request.op {
        RequestKind::Charge => {
            let amount = request.amount.unwrap_or_default();
            let outcome = processor.process_payment(&request.user, amount).await?;
            OutcomeRow::from_outcome("charge", &outcome)
        }
        RequestKind::Refund => {
            let outcome = processor.refund_payment(&request.tx).await?;
            OutcomeRow::from_outcome("refund", &outcome)
        }
        RequestKind::Status => {
            let status = processor.get_payment_status(&request.tx).await?;
            OutcomeRow::from_status("status", &request.tx, status)
        }
    };
    writer.write_row(row)
}
