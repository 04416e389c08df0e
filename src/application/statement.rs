use crate::application::engine::EngineConfig;
use crate::domain::account::{AccountId, Statement};
use crate::domain::ports::StatementSource;
use crate::error::{LedgerError, Result};
use crate::infrastructure::in_memory::InMemoryAccounts;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Produces one-instant snapshots of an account.
///
/// The snapshot is cloned under the account's read lock, so balance and
/// history always come from the same committed version. Readers on the same
/// account share the lock; only a concurrent writer excludes them.
pub struct StatementAssembler {
    accounts: Arc<InMemoryAccounts>,
    config: EngineConfig,
}

impl StatementAssembler {
    pub fn new(accounts: Arc<InMemoryAccounts>) -> Self {
        Self::with_config(accounts, EngineConfig::default())
    }

    pub fn with_config(accounts: Arc<InMemoryAccounts>, config: EngineConfig) -> Self {
        Self { accounts, config }
    }
}

#[async_trait]
impl StatementSource for StatementAssembler {
    async fn read(&self, account: AccountId) -> Result<Statement> {
        let cell = self
            .accounts
            .cell(account)
            .ok_or(LedgerError::UnknownAccount(account))?;

        let Some(state) = cell
            .read_bounded(self.config.lock_timeout, self.config.lock_retries)
            .await
        else {
            tracing::warn!(account, "gave up waiting for account lock");
            return Err(LedgerError::Contended(account));
        };

        let (balance, entries) = state.snapshot();
        Ok(Statement {
            balance,
            limit: cell.limit,
            as_of: Utc::now(),
            entries,
        })
    }
}
