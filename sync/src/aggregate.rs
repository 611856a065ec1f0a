use rust_decimal::Decimal;
use std::collections::HashMap;
use transport::models::{Balance, Bill, CurrencyAsset, Order, PendingOrder, Position};

/// An item tagged with the display name of the account it came from.
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub account: String,
    pub item: T,
}

/// Sum per-account balances into one all-accounts balance. Currency assets
/// are merged by currency code and ordered by USD equity, largest first.
pub fn sum_balances<'a>(balances: impl Iterator<Item = &'a Balance>) -> Balance {
    let mut total = Balance::default();
    let mut by_ccy: HashMap<String, CurrencyAsset> = HashMap::new();

    for balance in balances {
        total.total_equity += balance.total_equity;
        total.available += balance.available;
        total.frozen += balance.frozen;
        total.margin_used += balance.margin_used;
        total.unrealized_pnl += balance.unrealized_pnl;

        for asset in &balance.assets {
            by_ccy
                .entry(asset.ccy.clone())
                .and_modify(|merged| {
                    merged.bal += asset.bal;
                    merged.avail_bal += asset.avail_bal;
                    merged.frozen_bal += asset.frozen_bal;
                    merged.eq += asset.eq;
                    merged.eq_usd += asset.eq_usd;
                })
                .or_insert_with(|| asset.clone());
        }
    }

    let mut assets: Vec<CurrencyAsset> = by_ccy.into_values().collect();
    assets.sort_by(|a, b| b.eq_usd.cmp(&a.eq_usd));
    total.assets = assets;
    total
}

/// Concatenate per-account positions in roster order, each tagged with its
/// account name.
pub fn concat_positions<'a>(
    inputs: impl Iterator<Item = (&'a str, &'a [Position])>,
) -> Vec<Sourced<Position>> {
    let mut out = Vec::new();
    for (account, positions) in inputs {
        for position in positions {
            out.push(Sourced {
                account: account.to_string(),
                item: position.clone(),
            });
        }
    }
    out
}

/// Concatenate per-account pending orders, newest first across accounts.
pub fn concat_pending_orders<'a>(
    inputs: impl Iterator<Item = (&'a str, &'a [PendingOrder])>,
) -> Vec<Sourced<PendingOrder>> {
    let mut out = Vec::new();
    for (account, orders) in inputs {
        for order in orders {
            out.push(Sourced {
                account: account.to_string(),
                item: order.clone(),
            });
        }
    }
    out.sort_by(|a, b| b.item.created_at.cmp(&a.item.created_at));
    out
}

/// Merge per-account order pages into one list, newest first.
pub fn merge_orders<'a>(
    inputs: impl Iterator<Item = (&'a str, &'a [Order])>,
) -> Vec<Sourced<Order>> {
    let mut out = Vec::new();
    for (account, orders) in inputs {
        for order in orders {
            out.push(Sourced {
                account: account.to_string(),
                item: order.clone(),
            });
        }
    }
    out.sort_by(|a, b| b.item.created_at.cmp(&a.item.created_at));
    out
}

/// Merge per-account bill pages into one list, newest first.
pub fn merge_bills<'a>(inputs: impl Iterator<Item = (&'a str, &'a [Bill])>) -> Vec<Sourced<Bill>> {
    let mut out = Vec::new();
    for (account, bills) in inputs {
        for bill in bills {
            out.push(Sourced {
                account: account.to_string(),
                item: bill.clone(),
            });
        }
    }
    out.sort_by(|a, b| b.item.timestamp.cmp(&a.item.timestamp));
    out
}
