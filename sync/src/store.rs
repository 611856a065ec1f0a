use crate::aggregate::Sourced;
use crate::kind::DataKind;
use crate::scope::ScopeKey;
use crate::staleness::is_stale;
use std::collections::HashMap;
use transport::models::{
    Balance, Bill, ClosedPosition, EquityCurve, Order, PendingOrder, Position,
};

/// Payload of one cache entry. The variant always matches the entry's
/// `DataKind` key. The `Merged*` variants hold the all-accounts composite of
/// a fan-out, where each item keeps its source account's name.
#[derive(Debug, Clone)]
pub enum KindData {
    Balance(Balance),
    Positions(Vec<Position>),
    PendingOrders(Vec<PendingOrder>),
    Orders(Vec<Order>),
    Bills(Vec<Bill>),
    MergedOrders(Vec<Sourced<Order>>),
    MergedBills(Vec<Sourced<Bill>>),
    PositionHistory(Vec<ClosedPosition>),
    EquityCurve(EquityCurve),
}

impl KindData {
    pub fn kind(&self) -> DataKind {
        match self {
            KindData::Balance(_) => DataKind::Balance,
            KindData::Positions(_) => DataKind::Positions,
            KindData::PendingOrders(_) => DataKind::PendingOrders,
            KindData::Orders(_) | KindData::MergedOrders(_) => DataKind::Orders,
            KindData::Bills(_) | KindData::MergedBills(_) => DataKind::Bills,
            KindData::PositionHistory(_) => DataKind::PositionHistory,
            KindData::EquityCurve(_) => DataKind::EquityCurve,
        }
    }
}

/// One successfully pulled page-1 result. `fetched_at` is only ever set from
/// the moment a pull completed; a failed pull never produces an entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: KindData,
    pub has_more: bool,
    pub last_cursor: Option<String>,
    pub fetched_at: u64,
}

/// Keyed store of cache entries, one per (DataKind, ScopeKey). `put` is the
/// only mutator and fully replaces the entry; entries are never evicted —
/// staleness is judged at read time.
pub struct CacheStore {
    entries: HashMap<(DataKind, ScopeKey), CacheEntry>,
}

impl CacheStore {
    pub fn new() -> Self {
        CacheStore {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, kind: DataKind, scope: &ScopeKey) -> Option<&CacheEntry> {
        self.entries.get(&(kind, scope.clone()))
    }

    pub fn put(&mut self, kind: DataKind, scope: ScopeKey, entry: CacheEntry) {
        self.entries.insert((kind, scope), entry);
    }

    pub fn fetched_at(&self, kind: DataKind, scope: &ScopeKey) -> Option<u64> {
        self.get(kind, scope).map(|e| e.fetched_at)
    }

    /// Absent entries are always stale.
    pub fn is_stale(&self, kind: DataKind, scope: &ScopeKey, now: u64, ttl: u64) -> bool {
        is_stale(self.fetched_at(kind, scope), now, ttl)
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}
