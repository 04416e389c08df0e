use crate::domain::account::AccountId;
use std::collections::HashMap;

/// Immutable account-id to credit-limit lookup, built once at startup.
///
/// The account set never changes shape afterwards, so concurrent reads need
/// no synchronization.
#[derive(Debug, Clone)]
pub struct AccountRegistry {
    limits: HashMap<AccountId, i64>,
}

impl AccountRegistry {
    pub fn new(provisioned: impl IntoIterator<Item = (AccountId, i64)>) -> Self {
        Self {
            limits: provisioned.into_iter().collect(),
        }
    }

    /// The fixed account set the service ships with.
    pub fn provisioned() -> Self {
        Self::new([
            (1, 100_000),
            (2, 80_000),
            (3, 1_000_000),
            (4, 10_000_000),
            (5, 500_000),
        ])
    }

    pub fn limit_of(&self, account: AccountId) -> Option<i64> {
        self.limits.get(&account).copied()
    }

    pub fn accounts(&self) -> impl Iterator<Item = (AccountId, i64)> + '_ {
        self.limits.iter().map(|(id, limit)| (*id, *limit))
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provisioned_accounts() {
        let registry = AccountRegistry::provisioned();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.limit_of(1), Some(100_000));
        assert_eq!(registry.limit_of(4), Some(10_000_000));
    }

    #[test]
    fn test_unknown_account_has_no_limit() {
        let registry = AccountRegistry::provisioned();
        assert_eq!(registry.limit_of(6), None);
        assert_eq!(registry.limit_of(999), None);
        assert_eq!(registry.limit_of(-1), None);
    }
}
