use crate::scope::{AccountId, ScopeKey};
use std::collections::HashMap;
use transport::models::{AccountSummary, Balance, PendingOrder, Position};
use transport::PushFrame;

/// A live value with the instant it was last replaced.
#[derive(Debug, Clone)]
pub struct LiveSnapshot<T> {
    pub value: T,
    pub updated_at: u64,
}

/// What applying a push frame did, so the caller can decide whether a redraw
/// is warranted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushEffect {
    Balance(AccountId),
    Positions(AccountId),
    PendingOrders(AccountId),
    Error { account_id: AccountId, message: String },
}

/// Per-account live state fed by the push stream. Frames replace the whole
/// snapshot for their account; there is no partial merging.
pub struct LiveState {
    balances: HashMap<AccountId, LiveSnapshot<Balance>>,
    positions: HashMap<AccountId, LiveSnapshot<Vec<Position>>>,
    pending_orders: HashMap<AccountId, LiveSnapshot<Vec<PendingOrder>>>,
    // pending-order activity stamps, kept under both the account scope and
    // the all-accounts scope so either view can tell fresh activity apart
    pending_touch: HashMap<ScopeKey, u64>,
}

impl LiveState {
    pub fn new() -> Self {
        LiveState {
            balances: HashMap::new(),
            positions: HashMap::new(),
            pending_orders: HashMap::new(),
            pending_touch: HashMap::new(),
        }
    }

    pub fn balance(&self, account_id: &str) -> Option<&LiveSnapshot<Balance>> {
        self.balances.get(account_id)
    }

    pub fn positions(&self, account_id: &str) -> Option<&LiveSnapshot<Vec<Position>>> {
        self.positions.get(account_id)
    }

    pub fn pending_orders(&self, account_id: &str) -> Option<&LiveSnapshot<Vec<PendingOrder>>> {
        self.pending_orders.get(account_id)
    }

    pub fn pending_touched_at(&self, scope: &ScopeKey) -> Option<u64> {
        self.pending_touch.get(scope).copied()
    }

    /// Seed live balances and positions from a startup summary so the first
    /// render has data before any push frame arrives. Accounts that errored
    /// in the summary are skipped.
    pub fn hydrate_summary(&mut self, summaries: &[AccountSummary], now: u64) {
        for summary in summaries {
            if summary.error.is_some() {
                continue;
            }
            if let Some(balance) = &summary.balance {
                self.balances.insert(
                    summary.account.id.clone(),
                    LiveSnapshot {
                        value: balance.clone(),
                        updated_at: now,
                    },
                );
            }
            self.positions.insert(
                summary.account.id.clone(),
                LiveSnapshot {
                    value: summary.positions.clone(),
                    updated_at: now,
                },
            );
        }
    }

    pub fn apply(&mut self, frame: &PushFrame, now: u64) -> PushEffect {
        match frame {
            PushFrame::Balance {
                account_id, data, ..
            } => {
                self.balances.insert(
                    account_id.clone(),
                    LiveSnapshot {
                        value: data.clone(),
                        updated_at: now,
                    },
                );
                PushEffect::Balance(account_id.clone())
            }
            PushFrame::Positions {
                account_id, data, ..
            } => {
                self.positions.insert(
                    account_id.clone(),
                    LiveSnapshot {
                        value: data.clone(),
                        updated_at: now,
                    },
                );
                PushEffect::Positions(account_id.clone())
            }
            PushFrame::PendingOrders {
                account_id, data, ..
            } => {
                self.pending_orders.insert(
                    account_id.clone(),
                    LiveSnapshot {
                        value: data.clone(),
                        updated_at: now,
                    },
                );
                self.pending_touch
                    .insert(ScopeKey::Account(account_id.clone()), now);
                self.pending_touch.insert(ScopeKey::All, now);
                PushEffect::PendingOrders(account_id.clone())
            }
            PushFrame::Error {
                account_id,
                message,
                ..
            } => PushEffect::Error {
                account_id: account_id.clone(),
                message: message.clone(),
            },
        }
    }
}

impl Default for LiveState {
    fn default() -> Self {
        Self::new()
    }
}
