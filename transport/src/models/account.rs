use super::{Balance, Position};
use serde::{Deserialize, Serialize};

/// Roster entry. Fetched once at startup; the roster is only ever replaced
/// wholesale, never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub simulated: bool,
}

/// One account's slice of the startup bulk hydrate (`GET /api/summary`).
/// `error` is set instead of `balance`/`positions` when that account's
/// upstream query failed; the account is degraded, not dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account: Account,
    #[serde(default)]
    pub balance: Option<Balance>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub error: Option<String>,
}
