use crate::domain::transaction::{LedgerEntry, TransactionDraft, TransactionKind};
use crate::error::{LedgerError, Result};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

pub type AccountId = i64;

/// How many committed entries an account's history retains.
pub const HISTORY_DEPTH: usize = 10;

/// Mutable per-account record: current balance plus the bounded history.
///
/// Instances are only ever reached through the engine's per-account lock;
/// the methods here are the posting rules themselves and assume the caller
/// holds exclusive access.
#[derive(Debug, Default)]
pub struct AccountState {
    balance: i64,
    history: VecDeque<LedgerEntry>,
}

impl AccountState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Applies a validated transaction, stamping it with `occurred_at`.
    ///
    /// A credit always commits. A debit commits only if the candidate
    /// balance stays at or above `-limit`; a rejected debit leaves balance
    /// and history untouched.
    pub fn post(
        &mut self,
        draft: TransactionDraft,
        limit: i64,
        occurred_at: DateTime<Utc>,
    ) -> Result<i64> {
        let value = draft.amount.value();
        let candidate = match draft.kind {
            TransactionKind::Credit => self.balance + value,
            TransactionKind::Debit => self.balance - value,
        };
        if draft.kind == TransactionKind::Debit && candidate < -limit {
            return Err(LedgerError::LimitExceeded {
                balance: self.balance,
                limit,
                amount: value,
            });
        }

        self.balance = candidate;
        self.history.push_front(LedgerEntry {
            amount: draft.amount,
            kind: draft.kind,
            description: draft.description,
            occurred_at,
        });
        self.history.truncate(HISTORY_DEPTH);
        Ok(self.balance)
    }

    /// Clones `(balance, history)` as one snapshot, most-recent-first.
    pub fn snapshot(&self) -> (i64, Vec<LedgerEntry>) {
        (self.balance, self.history.iter().cloned().collect())
    }
}

/// Outcome of a committed transaction, echoed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub limit: i64,
    pub balance: i64,
}

/// One consistent view of an account: balance and history from the same
/// version, plus the wall-clock time the read was taken.
#[derive(Debug, Clone)]
pub struct Statement {
    pub balance: i64,
    pub limit: i64,
    pub as_of: DateTime<Utc>,
    pub entries: Vec<LedgerEntry>,
}
