#[cfg(test)]
mod tests {
    use crate::live::{LiveState, PushEffect};
    use crate::scope::ScopeKey;
    use rust_decimal::Decimal;
    use transport::models::{Account, AccountSummary, Balance};
    use transport::PushFrame;

    fn balance(total: i64) -> Balance {
        Balance {
            total_equity: Decimal::from(total),
            ..Balance::default()
        }
    }

    fn balance_frame(account_id: &str, total: i64) -> PushFrame {
        PushFrame::Balance {
            account_id: account_id.to_string(),
            data: balance(total),
            timestamp: None,
        }
    }

    #[test]
    fn test_balance_frame_replaces_snapshot() {
        let mut live = LiveState::new();
        live.apply(&balance_frame("acc-1", 100), 1_000);
        let effect = live.apply(&balance_frame("acc-1", 120), 2_000);

        assert_eq!(effect, PushEffect::Balance("acc-1".to_string()));
        let snap = live.balance("acc-1").unwrap();
        assert_eq!(snap.value.total_equity, Decimal::from(120));
        assert_eq!(snap.updated_at, 2_000);
    }

    #[test]
    fn test_accounts_do_not_cross() {
        let mut live = LiveState::new();
        live.apply(&balance_frame("acc-1", 100), 1_000);
        assert!(live.balance("acc-2").is_none());
    }

    #[test]
    fn test_pending_orders_touch_both_scopes() {
        let mut live = LiveState::new();
        let frame = PushFrame::PendingOrders {
            account_id: "acc-1".to_string(),
            data: vec![],
            timestamp: None,
        };
        live.apply(&frame, 5_000);

        assert_eq!(
            live.pending_touched_at(&ScopeKey::Account("acc-1".to_string())),
            Some(5_000)
        );
        assert_eq!(live.pending_touched_at(&ScopeKey::All), Some(5_000));
        assert_eq!(
            live.pending_touched_at(&ScopeKey::Account("acc-2".to_string())),
            None
        );
    }

    #[test]
    fn test_error_frame_changes_nothing() {
        let mut live = LiveState::new();
        live.apply(&balance_frame("acc-1", 100), 1_000);
        let effect = live.apply(
            &PushFrame::Error {
                account_id: "acc-1".to_string(),
                message: "stream hiccup".to_string(),
                timestamp: None,
            },
            2_000,
        );

        assert_eq!(
            effect,
            PushEffect::Error {
                account_id: "acc-1".to_string(),
                message: "stream hiccup".to_string(),
            }
        );
        // the last good snapshot survives
        assert_eq!(live.balance("acc-1").unwrap().updated_at, 1_000);
    }

    #[test]
    fn test_hydrate_summary_skips_errored_accounts() {
        let mut live = LiveState::new();
        let summaries = vec![
            AccountSummary {
                account: Account {
                    id: "acc-1".to_string(),
                    name: "main".to_string(),
                    simulated: false,
                },
                balance: Some(balance(100)),
                positions: vec![],
                error: None,
            },
            AccountSummary {
                account: Account {
                    id: "acc-2".to_string(),
                    name: "backup".to_string(),
                    simulated: false,
                },
                balance: None,
                positions: vec![],
                error: Some("unreachable".to_string()),
            },
        ];
        live.hydrate_summary(&summaries, 3_000);

        assert_eq!(
            live.balance("acc-1").unwrap().value.total_equity,
            Decimal::from(100)
        );
        assert!(live.balance("acc-2").is_none());
        assert!(live.positions("acc-2").is_none());
        // hydration is not pending-order activity
        assert_eq!(live.pending_touched_at(&ScopeKey::All), None);
    }
}
