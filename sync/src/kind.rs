/// The data kinds the monitor tracks. Each kind carries three static
/// policies: whether it paginates, whether the push channel can update it,
/// and whether the "all accounts" scope is defined for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    Balance,
    Positions,
    PendingOrders,
    Orders,
    Bills,
    PositionHistory,
    EquityCurve,
}

impl DataKind {
    pub const ALL: [DataKind; 7] = [
        DataKind::Balance,
        DataKind::Positions,
        DataKind::PendingOrders,
        DataKind::Orders,
        DataKind::Bills,
        DataKind::PositionHistory,
        DataKind::EquityCurve,
    ];

    pub fn paginates(&self) -> bool {
        matches!(
            self,
            DataKind::Orders | DataKind::Bills | DataKind::PositionHistory
        )
    }

    pub fn push_capable(&self) -> bool {
        matches!(
            self,
            DataKind::Balance | DataKind::Positions | DataKind::PendingOrders
        )
    }

    /// Kinds for which the "all accounts" scope is defined at all. Requesting
    /// an unsupported kind under `All` forces a scope narrowing to a concrete
    /// account.
    pub fn supports_all(&self) -> bool {
        !matches!(self, DataKind::PositionHistory | DataKind::EquityCurve)
    }

    /// Orders and bills under `All` are a per-account fan-out cached as one
    /// non-paginated composite.
    pub fn fans_out(&self) -> bool {
        matches!(self, DataKind::Orders | DataKind::Bills)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::Balance => "balance",
            DataKind::Positions => "positions",
            DataKind::PendingOrders => "pending_orders",
            DataKind::Orders => "orders",
            DataKind::Bills => "bills",
            DataKind::PositionHistory => "position_history",
            DataKind::EquityCurve => "equity_curve",
        }
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_policy() {
        assert!(DataKind::Orders.paginates());
        assert!(DataKind::Bills.paginates());
        assert!(DataKind::PositionHistory.paginates());
        assert!(!DataKind::Balance.paginates());
        assert!(!DataKind::Positions.paginates());
        assert!(!DataKind::PendingOrders.paginates());
        assert!(!DataKind::EquityCurve.paginates());
    }

    #[test]
    fn test_push_policy() {
        assert!(DataKind::Balance.push_capable());
        assert!(DataKind::Positions.push_capable());
        assert!(DataKind::PendingOrders.push_capable());
        assert!(!DataKind::Orders.push_capable());
    }

    #[test]
    fn test_scope_policy() {
        assert!(!DataKind::EquityCurve.supports_all());
        assert!(!DataKind::PositionHistory.supports_all());
        assert!(DataKind::Balance.supports_all());
        assert!(DataKind::Orders.supports_all());
    }
}
