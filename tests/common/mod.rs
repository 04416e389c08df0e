use contas::application::engine::LedgerEngine;
use contas::application::statement::StatementAssembler;
use contas::domain::transaction::{TransactionDraft, TransactionRequest};
use contas::infrastructure::in_memory::InMemoryAccounts;
use contas::infrastructure::registry::AccountRegistry;
use std::sync::Arc;

pub struct Rig {
    pub engine: Arc<LedgerEngine>,
    pub statements: Arc<StatementAssembler>,
}

/// Engine and assembler over a single account with the given limit.
pub fn single_account(limit: i64) -> Rig {
    rig(AccountRegistry::new([(1, limit)]))
}

pub fn rig(registry: AccountRegistry) -> Rig {
    let accounts = Arc::new(InMemoryAccounts::provision(&registry));
    Rig {
        engine: Arc::new(LedgerEngine::new(accounts.clone())),
        statements: Arc::new(StatementAssembler::new(accounts)),
    }
}

pub fn draft(value: i64, kind: &str, description: &str) -> TransactionDraft {
    TransactionRequest {
        value,
        kind: kind.to_string(),
        description: Some(description.to_string()),
    }
    .validate()
    .expect("test draft is valid")
}
