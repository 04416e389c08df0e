use super::account::{AccountId, Receipt, Statement};
use super::transaction::TransactionDraft;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Write side of the ledger: applies validated transactions to an account.
#[async_trait]
pub trait TransactionLedger: Send + Sync {
    async fn apply(&self, account: AccountId, draft: TransactionDraft) -> Result<Receipt>;
}

/// Read side of the ledger: consistent balance-plus-history snapshots.
#[async_trait]
pub trait StatementSource: Send + Sync {
    async fn read(&self, account: AccountId) -> Result<Statement>;
}

pub type LedgerHandle = Arc<dyn TransactionLedger>;
pub type StatementHandle = Arc<dyn StatementSource>;
