pub type AccountId = String;

/// Cache and pagination partition key: one concrete account, or the
/// synthetic "all accounts" composite.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    All,
    Account(AccountId),
}

impl ScopeKey {
    pub fn account<S: Into<AccountId>>(id: S) -> Self {
        ScopeKey::Account(id.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ScopeKey::All)
    }

    pub fn account_id(&self) -> Option<&str> {
        match self {
            ScopeKey::All => None,
            ScopeKey::Account(id) => Some(id),
        }
    }

    /// Whether a push message for `account_id` is visible under this scope.
    pub fn covers_account(&self, account_id: &str) -> bool {
        match self {
            ScopeKey::All => true,
            ScopeKey::Account(id) => id == account_id,
        }
    }
}

impl std::fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeKey::All => write!(f, "all"),
            ScopeKey::Account(id) => write!(f, "account:{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_account() {
        assert!(ScopeKey::All.covers_account("1"));
        assert!(ScopeKey::account("1").covers_account("1"));
        assert!(!ScopeKey::account("1").covers_account("2"));
    }

    #[test]
    fn test_equality() {
        assert_eq!(ScopeKey::account("1"), ScopeKey::Account("1".to_string()));
        assert_ne!(ScopeKey::All, ScopeKey::account("1"));
    }
}
