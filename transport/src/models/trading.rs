use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub inst_id: String,
    pub pos_side: String,
    pub pos: Decimal,
    pub avg_px: Decimal,
    pub mark_px: Decimal,
    pub upl: Decimal,
    pub upl_ratio: Decimal,
    pub margin: Decimal,
    pub lever: u32,
    #[serde(default)]
    pub liq_px: Option<Decimal>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Working order (live or partially filled). TP/SL trigger prices ride along
/// when the order carries attached algos; an order price of None means market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingOrder {
    pub order_id: String,
    pub inst_id: String,
    pub side: String,
    pub pos_side: String,
    pub order_type: String,
    pub sz: Decimal,
    #[serde(default)]
    pub px: Option<Decimal>,
    #[serde(default)]
    pub fill_sz: Decimal,
    #[serde(default)]
    pub avg_px: Option<Decimal>,
    pub state: String,
    #[serde(default = "default_lever")]
    pub lever: u32,
    #[serde(default)]
    pub sl_trigger_px: Option<Decimal>,
    #[serde(default)]
    pub sl_ord_px: Option<Decimal>,
    #[serde(default)]
    pub tp_trigger_px: Option<Decimal>,
    #[serde(default)]
    pub tp_ord_px: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_lever() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub inst_id: String,
    pub side: String,
    pub pos_side: String,
    pub order_type: String,
    pub sz: Decimal,
    #[serde(default)]
    pub px: Option<Decimal>,
    #[serde(default)]
    pub avg_px: Option<Decimal>,
    pub state: String,
    pub pnl: Decimal,
    pub fee: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub bill_id: String,
    #[serde(default)]
    pub inst_id: String,
    pub ccy: String,
    pub bill_type: String,
    pub sub_type: String,
    pub pnl: Decimal,
    pub fee: Decimal,
    pub bal: Decimal,
    pub bal_chg: Decimal,
    pub sz: Decimal,
    #[serde(default)]
    pub px: Option<Decimal>,
    #[serde(default)]
    pub exec_type: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A closed position from the positions-history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosedPosition {
    pub inst_id: String,
    pub pos_side: String,
    pub lever: u32,
    pub open_avg_px: Decimal,
    pub close_avg_px: Decimal,
    pub realized_pnl: Decimal,
    pub pnl_ratio: Decimal,
    pub created_at: DateTime<Utc>,
    pub closed_at: DateTime<Utc>,
}

/// Cursor-paginated pull response; `last_id` is the opaque cursor for the
/// next page and is only meaningful while `has_more` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    #[serde(default)]
    pub last_id: Option<String>,
}
