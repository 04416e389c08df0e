use crate::domain::account::{AccountId, AccountState};
use crate::infrastructure::registry::AccountRegistry;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::time::timeout;

/// Fixed-shape collection of per-account state cells.
///
/// Each account carries its own `RwLock`: writers on the same account
/// serialize, writers on different accounts run in parallel, and readers
/// never block other readers. The map itself is immutable after
/// construction, so lookups take no lock.
pub struct InMemoryAccounts {
    cells: HashMap<AccountId, AccountCell>,
}

pub struct AccountCell {
    pub limit: i64,
    state: RwLock<AccountState>,
}

impl InMemoryAccounts {
    /// Materializes a zero-balance state cell for every provisioned account.
    pub fn provision(registry: &AccountRegistry) -> Self {
        let cells = registry
            .accounts()
            .map(|(id, limit)| {
                let cell = AccountCell {
                    limit,
                    state: RwLock::new(AccountState::new()),
                };
                (id, cell)
            })
            .collect();
        Self { cells }
    }

    pub fn cell(&self, account: AccountId) -> Option<&AccountCell> {
        self.cells.get(&account)
    }
}

impl AccountCell {
    /// Exclusive access to the state, waiting at most `wait` per attempt.
    pub async fn write_bounded(
        &self,
        wait: Duration,
        retries: u32,
    ) -> Option<RwLockWriteGuard<'_, AccountState>> {
        for _ in 0..=retries {
            if let Ok(guard) = timeout(wait, self.state.write()).await {
                return Some(guard);
            }
        }
        None
    }

    /// Shared access to the state, waiting at most `wait` per attempt.
    pub async fn read_bounded(
        &self,
        wait: Duration,
        retries: u32,
    ) -> Option<RwLockReadGuard<'_, AccountState>> {
        for _ in 0..=retries {
            if let Ok(guard) = timeout(wait, self.state.read()).await {
                return Some(guard);
            }
        }
        None
    }
}
