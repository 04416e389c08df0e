use crate::domain::account::AccountId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("account {0} is not provisioned")]
    UnknownAccount(AccountId),
    #[error("invalid transaction: {0}")]
    Validation(String),
    #[error("debit of {amount} would overdraw balance {balance} past limit {limit}")]
    LimitExceeded { balance: i64, limit: i64, amount: i64 },
    #[error("account {0} is contended, retry later")]
    Contended(AccountId),
    #[error("internal error: {0}")]
    Internal(String),
}
