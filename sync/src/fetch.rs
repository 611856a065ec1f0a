use crate::kind::DataKind;
use crate::scope::{AccountId, ScopeKey};
use crate::store::KindData;
use std::collections::HashMap;

/// One pull the engine wants executed. `scope` is the cache slot the result
/// belongs to, `account_id` the account to query; under a fan-out these
/// differ. `generation` stamps the command so outcomes from a superseded
/// pull round can be discarded.
#[derive(Debug, Clone)]
pub struct FetchCommand {
    pub kind: DataKind,
    pub account_id: AccountId,
    pub scope: ScopeKey,
    pub page: usize,
    pub cursor: Option<String>,
    pub generation: u64,
}

/// Parsed result of one completed command. A failed pull carries the error
/// text only; the cache is never touched by failures.
#[derive(Debug, Clone)]
pub struct FetchPayload {
    pub data: KindData,
    pub has_more: bool,
    pub last_cursor: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub command: FetchCommand,
    pub result: std::result::Result<FetchPayload, String>,
}

/// Monotonic counters per (kind, scope). Bumping invalidates every command
/// issued under the previous count.
pub struct Generations {
    counters: HashMap<(DataKind, ScopeKey), u64>,
}

impl Generations {
    pub fn new() -> Self {
        Generations {
            counters: HashMap::new(),
        }
    }

    pub fn current(&self, kind: DataKind, scope: &ScopeKey) -> u64 {
        self.counters
            .get(&(kind, scope.clone()))
            .copied()
            .unwrap_or(0)
    }

    pub fn bump(&mut self, kind: DataKind, scope: &ScopeKey) -> u64 {
        let counter = self.counters.entry((kind, scope.clone())).or_insert(0);
        *counter += 1;
        *counter
    }

    pub fn is_current(&self, command: &FetchCommand) -> bool {
        command.generation == self.current(command.kind, &command.scope)
    }
}

impl Default for Generations {
    fn default() -> Self {
        Self::new()
    }
}
