//! Application layer containing the orchestration logic.
//!
//! This module defines the `PaymentProcessor`, the single entry point through
//! which callers charge, refund, and query transactions against an injected
//! gateway implementation.

pub mod processor;
