#[cfg(test)]
mod tests {
    use crate::kind::DataKind;
    use crate::scope::ScopeKey;
    use crate::store::{CacheEntry, CacheStore, KindData};
    use transport::models::Balance;

    fn balance_entry(fetched_at: u64) -> CacheEntry {
        CacheEntry {
            data: KindData::Balance(Balance::default()),
            has_more: false,
            last_cursor: None,
            fetched_at,
        }
    }

    #[test]
    fn test_missing_entry_is_stale() {
        let store = CacheStore::new();
        let scope = ScopeKey::Account("acc-1".to_string());
        assert!(store.get(DataKind::Balance, &scope).is_none());
        assert!(store.is_stale(DataKind::Balance, &scope, 1_000, 30_000));
    }

    #[test]
    fn test_put_then_get() {
        let mut store = CacheStore::new();
        let scope = ScopeKey::Account("acc-1".to_string());
        store.put(DataKind::Balance, scope.clone(), balance_entry(10_000));

        let entry = store.get(DataKind::Balance, &scope).unwrap();
        assert_eq!(entry.fetched_at, 10_000);
        assert_eq!(entry.data.kind(), DataKind::Balance);
    }

    #[test]
    fn test_ttl_boundary() {
        let mut store = CacheStore::new();
        let scope = ScopeKey::All;
        store.put(DataKind::Balance, scope.clone(), balance_entry(10_000));

        // exactly at the TTL is still fresh, one past is stale
        assert!(!store.is_stale(DataKind::Balance, &scope, 40_000, 30_000));
        assert!(store.is_stale(DataKind::Balance, &scope, 40_001, 30_000));
    }

    #[test]
    fn test_put_replaces_wholesale() {
        let mut store = CacheStore::new();
        let scope = ScopeKey::Account("acc-1".to_string());
        let mut first = balance_entry(1_000);
        first.has_more = true;
        first.last_cursor = Some("X123".to_string());
        store.put(DataKind::Orders, scope.clone(), first);

        store.put(DataKind::Orders, scope.clone(), balance_entry(2_000));
        let entry = store.get(DataKind::Orders, &scope).unwrap();
        assert_eq!(entry.fetched_at, 2_000);
        assert!(!entry.has_more);
        assert!(entry.last_cursor.is_none());
    }

    #[test]
    fn test_scopes_are_independent() {
        let mut store = CacheStore::new();
        let acc = ScopeKey::Account("acc-1".to_string());
        store.put(DataKind::Balance, acc.clone(), balance_entry(5_000));

        assert!(store.get(DataKind::Balance, &ScopeKey::All).is_none());
        assert!(
            store
                .get(DataKind::Balance, &ScopeKey::Account("acc-2".to_string()))
                .is_none()
        );
        assert!(store.get(DataKind::Balance, &acc).is_some());
    }
}
