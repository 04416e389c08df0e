//! Application layer orchestrating the ledger core.
//!
//! `LedgerEngine` is the single write path: it serializes transactions per
//! account and applies the check-then-commit step atomically.
//! `StatementAssembler` is the read path, producing one-instant snapshots.

pub mod engine;
pub mod statement;
