/// Read-time freshness judgment. Absent timestamps are always stale; a value
/// exactly at the TTL boundary is still fresh.
pub fn is_stale(ts_millis: Option<u64>, now_millis: u64, ttl_millis: u64) -> bool {
    match ts_millis {
        None => true,
        Some(ts) => now_millis.saturating_sub(ts) > ttl_millis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_stale() {
        assert!(is_stale(None, 1000, 30_000));
    }

    #[test]
    fn test_within_ttl_is_fresh() {
        assert!(!is_stale(Some(0), 10_000, 30_000));
        assert!(!is_stale(Some(0), 30_000, 30_000));
    }

    #[test]
    fn test_beyond_ttl_is_stale() {
        assert!(is_stale(Some(0), 30_001, 30_000));
        assert!(is_stale(Some(0), 31_000, 30_000));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        assert!(!is_stale(Some(5000), 1000, 30_000));
    }
}
