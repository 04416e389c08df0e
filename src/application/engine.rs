use crate::domain::account::{AccountId, Receipt};
use crate::domain::ports::TransactionLedger;
use crate::domain::transaction::TransactionDraft;
use crate::error::{LedgerError, Result};
use crate::infrastructure::in_memory::InMemoryAccounts;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

/// Bounds on waiting for an account's serialization point.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub lock_timeout: Duration,
    pub lock_retries: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_secs(5),
            lock_retries: 2,
        }
    }
}

/// Applies validated transactions to account state.
///
/// Each account has its own write lock. The limit check and the commit run
/// under it with no await point in between, so no caller can ever observe a
/// stale balance or a half-applied transaction.
pub struct LedgerEngine {
    accounts: Arc<InMemoryAccounts>,
    config: EngineConfig,
}

impl LedgerEngine {
    pub fn new(accounts: Arc<InMemoryAccounts>) -> Self {
        Self::with_config(accounts, EngineConfig::default())
    }

    pub fn with_config(accounts: Arc<InMemoryAccounts>, config: EngineConfig) -> Self {
        Self { accounts, config }
    }
}

#[async_trait]
impl TransactionLedger for LedgerEngine {
    async fn apply(&self, account: AccountId, draft: TransactionDraft) -> Result<Receipt> {
        let cell = self
            .accounts
            .cell(account)
            .ok_or(LedgerError::UnknownAccount(account))?;

        let Some(mut state) = cell
            .write_bounded(self.config.lock_timeout, self.config.lock_retries)
            .await
        else {
            tracing::warn!(account, "gave up waiting for account lock");
            return Err(LedgerError::Contended(account));
        };

        match state.post(draft, cell.limit, Utc::now()) {
            Ok(balance) => Ok(Receipt {
                limit: cell.limit,
                balance,
            }),
            Err(err) => {
                tracing::debug!(account, %err, "transaction rejected");
                Err(err)
            }
        }
    }
}
