use crate::aggregate::Sourced;
use crate::kind::DataKind;
use crate::scope::{AccountId, ScopeKey};
use transport::models::{
    Balance, Bill, ClosedPosition, EquityCurve, Order, PendingOrder, Position,
};

/// What the active view renders. Items are tagged with their source account
/// even under a single-account scope, so the renderer never special-cases.
#[derive(Debug, Clone)]
pub enum ViewData {
    Balance(Balance),
    Positions(Vec<Sourced<Position>>),
    PendingOrders(Vec<Sourced<PendingOrder>>),
    Orders(Vec<Sourced<Order>>),
    Bills(Vec<Sourced<Bill>>),
    PositionHistory(Vec<ClosedPosition>),
    EquityCurve(EquityCurve),
    /// Nothing usable yet, neither cached nor live.
    Empty,
}

/// One renderable snapshot of the active (kind, scope) pair.
#[derive(Debug, Clone)]
pub struct DisplayData {
    pub kind: DataKind,
    pub scope: ScopeKey,
    pub view: ViewData,
    /// Cache entry is past its TTL or absent.
    pub stale: bool,
    /// A fan-out composite with at least one failed account.
    pub partial: bool,
    /// The last pull for this pair failed; the shown data predates it.
    pub degraded: bool,
    pub page: usize,
    pub has_more: bool,
}

/// Notification the engine hands to its registered callback when the screen
/// should change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderSignal {
    /// The active view's data changed, redraw it.
    Refresh { kind: DataKind, scope: ScopeKey },
    /// An account reported an error worth surfacing in the status line.
    Degraded {
        account_id: AccountId,
        message: String,
    },
}
